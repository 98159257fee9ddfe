//! The admin API client handle and its builder.
//!
//! [`ThreeScaleClient`] is an immutable bundle of admin portal, credential,
//! and transport. Every call is self-contained, so a single client can be
//! shared between tasks as long as its transport can.

mod executor;

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::admin_portal::AdminPortal;
use crate::auth::Credential;
use crate::error::{ApiError, ConfigError};
use crate::transport::{ReqwestTransport, Transport};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a [`ThreeScaleClient`].
#[derive(Debug)]
pub struct ThreeScaleClientBuilder {
    portal: AdminPortal,
    credential: Credential,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl ThreeScaleClientBuilder {
    fn new(portal: AdminPortal, credential: Credential) -> Self {
        Self {
            portal,
            credential,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Sets the request timeout of the default transport.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = ThreeScaleClient::builder(portal, "token".into())
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request, whatever the transport.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is not a
    /// valid HTTP header.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = name.as_ref();
        HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))?;
        HeaderValue::try_from(value.as_ref()).map_err(|e| ConfigError::invalid_header(name, e))?;
        self.default_headers
            .push((name.to_string(), value.as_ref().to_string()));
        Ok(self)
    }

    /// Builds a client on the default `reqwest` transport.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<ThreeScaleClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ConfigError::HttpClient)?;
        let transport = ReqwestTransport::new(client, self.timeout);
        Ok(self.build_with_transport(transport))
    }

    /// Builds a client on a caller-supplied transport.
    ///
    /// The configured timeout does not apply; deadlines are the transport's
    /// responsibility.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> ThreeScaleClient<T> {
        ThreeScaleClient {
            portal: self.portal,
            credential: self.credential,
            default_headers: self.default_headers,
            transport,
        }
    }
}

/// Async client for the 3scale Account Management API.
///
/// ## Examples
///
/// ```rust,ignore
/// use porta::{AdminPortal, ThreeScaleClient};
///
/// let portal = AdminPortal::parse("https://acme-admin.3scale.net")?;
/// let client = ThreeScaleClient::new(portal, "access-token".into())?;
///
/// let products = client.list_products().await?;
/// println!("{} products", products.products.len());
/// ```
#[derive(Debug)]
pub struct ThreeScaleClient<T = ReqwestTransport> {
    portal: AdminPortal,
    credential: Credential,
    default_headers: Vec<(String, String)>,
    transport: T,
}

impl ThreeScaleClient {
    /// Creates a new builder for configuring a client.
    pub fn builder(portal: AdminPortal, credential: Credential) -> ThreeScaleClientBuilder {
        ThreeScaleClientBuilder::new(portal, credential)
    }

    /// Creates a client with default settings on the `reqwest` transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(portal: AdminPortal, credential: Credential) -> Result<Self, ApiError> {
        Self::builder(portal, credential).build()
    }
}

impl<T: Transport> ThreeScaleClient<T> {
    /// Creates a client on a caller-supplied transport.
    pub fn with_transport(portal: AdminPortal, credential: Credential, transport: T) -> Self {
        ThreeScaleClientBuilder::new(portal, credential).build_with_transport(transport)
    }

    /// Returns the admin portal this client talks to.
    pub fn admin_portal(&self) -> &AdminPortal {
        &self.portal
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{FnTransport, HttpResponse};

    fn portal() -> AdminPortal {
        AdminPortal::parse("https://www.test.com").unwrap()
    }

    #[test]
    fn test_build_default_transport() {
        let client = ThreeScaleClient::builder(portal(), "token".into())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.admin_portal().raw_url(), "https://www.test.com");
    }

    #[test]
    fn test_default_header_rejects_invalid_name() {
        let result = ThreeScaleClient::builder(portal(), "token".into())
            .default_header("bad header", "value");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_with_transport() {
        let transport = FnTransport::new(|_| Ok(HttpResponse::new(200, "{}")));
        let client = ThreeScaleClient::with_transport(portal(), "token".into(), transport);
        assert_eq!(client.admin_portal().host(), Some("www.test.com"));
    }
}
