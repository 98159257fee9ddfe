//! The structured error returned for any non-success API outcome.

use thiserror::Error;

use super::ValidationError;

/// A failed call as reported (or misreported) by the 3scale API.
///
/// Carries the HTTP status actually returned and a reason extracted from the
/// error body. When the body itself cannot be decoded, the reason is
/// `decoding error - <decoder message>`.
///
/// ## Examples
///
/// ```rust
/// use porta::ResponseError;
///
/// let err = ResponseError::new(404, "Not found");
/// assert_eq!(err.code(), 404);
/// assert_eq!(
///     err.to_string(),
///     "error calling 3scale system - reason: Not found - code: 404"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error calling 3scale system - reason: {reason} - code: {code}")]
pub struct ResponseError {
    code: u16,
    reason: String,
}

impl ResponseError {
    /// Creates an error from a status code and a reason.
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    /// Creates the error used when a response body fails to decode.
    pub fn decoding(code: u16, err: &ValidationError) -> Self {
        Self::new(code, format!("decoding error - {err}"))
    }

    /// The HTTP status code returned by the server.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The human-readable reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns `true` if the reason comes from a body that failed to decode.
    pub fn is_decoding_error(&self) -> bool {
        self.reason.starts_with("decoding error - ")
    }
}
