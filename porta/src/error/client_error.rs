//! Request building and transport errors.

use thiserror::Error;

/// Errors from the request builder and the transport layer.
///
/// Build errors abort a call before any network I/O. Transport errors mean
/// the round trip itself failed; no status code is available for them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The resource path could not be resolved against the admin portal.
    #[error("error building http request: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A structured payload could not be encoded.
    #[error("error building http request: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to reach the server through a caller-supplied transport.
    #[error("connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Returns `true` if the failure happened during the round trip rather
    /// than while building the request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Timeout { .. } | Self::Connection(_)
        )
    }

    /// Returns `true` if retrying the call could plausibly succeed.
    ///
    /// The client itself never retries; this is a hint for callers that
    /// implement their own policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidUrl(_) | Self::Encode(_) => false,
        }
    }
}
