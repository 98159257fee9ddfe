//! Top-level API error type.

use super::{ClientError, ConfigError, ResponseError};
use thiserror::Error;

/// Top-level error type for all client operations.
///
/// Each variant corresponds to one stage of a call, so callers can branch on
/// "did the API answer" without knowing which wire format was involved.
///
/// ## Examples
///
/// ```rust,ignore
/// use porta::ApiError;
///
/// match client.read_product(42).await {
///     Ok(product) => println!("{}", product.element.name),
///     Err(ApiError::Response(e)) if e.code() == 404 => println!("gone"),
///     Err(e) => return Err(e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Admin portal or client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Request building and transport errors.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Status mismatch or undecodable body.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl ApiError {
    /// The HTTP status code, when the API answered.
    pub fn code(&self) -> Option<u16> {
        self.as_response().map(ResponseError::code)
    }

    /// Returns the structured API error, if this is one.
    pub fn as_response(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the round trip itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_transport())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_error() {
        let api_err: ApiError = ResponseError::new(404, "Not found").into();
        assert_eq!(api_err.code(), Some(404));
        assert!(!api_err.is_transport());
    }

    #[test]
    fn test_from_client_error() {
        let api_err: ApiError = ClientError::Timeout { duration_ms: 5000 }.into();
        assert!(matches!(api_err, ApiError::Client(_)));
        assert_eq!(api_err.code(), None);
        assert!(api_err.is_transport());
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err = ApiError::Config(ConfigError::unsupported_scheme("ftp"));
        assert_eq!(err.to_string(), "unsupported admin portal scheme: ftp");
    }
}
