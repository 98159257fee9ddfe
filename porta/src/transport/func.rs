//! Closure-backed transport.

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::ClientError;

/// A [`Transport`] that answers every request with a closure.
///
/// ## Examples
///
/// ```rust
/// use porta::transport::{FnTransport, HttpResponse};
///
/// let transport = FnTransport::new(|request| {
///     assert_eq!(request.url.path(), "/admin/api/services/1.json");
///     Ok(HttpResponse::new(200, r#"{"service":{"id":1}}"#))
/// });
/// # let _ = transport;
/// ```
#[derive(Debug, Clone)]
pub struct FnTransport<F>(F);

impl<F> FnTransport<F>
where
    F: Fn(HttpRequest) -> Result<HttpResponse, ClientError> + Send + Sync,
{
    /// Wraps a request handler.
    pub fn new(handler: F) -> Self {
        Self(handler)
    }
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(HttpRequest) -> Result<HttpResponse, ClientError> + Send + Sync,
{
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        (self.0)(request)
    }
}
