//! Admin portal and client configuration errors.

use thiserror::Error;

/// Errors raised while configuring an admin portal or a client.
///
/// These occur before any request is sent and indicate the caller must not
/// proceed with the given configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("invalid admin portal URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL scheme is neither `http` nor `https`.
    #[error("unsupported admin portal scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A default header name or value could not be encoded.
    #[error("invalid default header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates an unsupported scheme error.
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
