//! Pluggable HTTP execution.
//!
//! The client hands a fully built [`HttpRequest`] to a [`Transport`] and gets
//! back an [`HttpResponse`] whose body has already been read in full, so the
//! underlying connection is released before decoding starts.
//!
//! [`ReqwestTransport`] is the production implementation. [`FnTransport`]
//! wraps a closure and is meant for fakes in tests.

mod func;
mod reqwest_transport;

use std::future::Future;

use bytes::Bytes;
use url::Url;

use crate::error::ClientError;
use crate::method::RestMethod;
use crate::params::Params;

pub use func::FnTransport;
pub use reqwest_transport::ReqwestTransport;

/// Executes one HTTP round trip.
///
/// Implementations must be safe to share between concurrent calls; the
/// client itself holds no mutable state.
pub trait Transport: Send + Sync {
    /// Sends the request and returns the full response.
    ///
    /// ## Errors
    ///
    /// Returns a transport [`ClientError`] when no response was received.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;
}

/// A fully built request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP verb.
    pub method: RestMethod,
    /// Absolute URL, query string included.
    pub url: Url,
    /// Request headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// Encoded body, if any.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    pub fn new(method: RestMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Looks up a header value, ignoring the case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decoded query parameters.
    pub fn query(&self) -> Params {
        self.url.query_pairs().collect()
    }

    /// Decoded `application/x-www-form-urlencoded` body parameters.
    ///
    /// Returns an empty bag when there is no body.
    pub fn form(&self) -> Params {
        self.body
            .as_deref()
            .map(|body| url::form_urlencoded::parse(body).collect())
            .unwrap_or_default()
    }
}

/// A response whose body has been read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Complete response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response without headers.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Creates a JSON response.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string()).with_header("Content-Type", "application/json")
    }

    /// Creates an XML response.
    pub fn xml(status: u16, body: impl Into<Bytes>) -> Self {
        Self::new(status, body).with_header("Content-Type", "application/xml")
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
