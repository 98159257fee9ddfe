//! Credentials and the per-endpoint conventions for sending them.
//!
//! The admin API accepts the same access token two ways, depending on the
//! endpoint generation:
//!
//! - HTTP Basic with an empty username and the token as password
//! - A named form or query parameter (`access_token` on legacy XML endpoints)
//!
//! The convention is a property of each endpoint, so it lives on
//! [`Endpoint`](crate::Endpoint) rather than on the client.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Name of the legacy credential parameter.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// An admin portal access token.
///
/// The token is opaque to the client. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps an access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The `Authorization` header value: `Basic ` + base64(`:` + token).
    pub fn basic_authorization(&self) -> String {
        format!("Basic {}", BASE64.encode(format!(":{}", self.0)))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// How an endpoint expects the credential to be transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// `Authorization: Basic base64(":" + token)`.
    #[default]
    Basic,

    /// Named parameter: query string for GET, form body for writes.
    Param(&'static str),
}

impl AuthMethod {
    /// The legacy `access_token` parameter convention.
    pub const ACCESS_TOKEN: Self = Self::Param(ACCESS_TOKEN_PARAM);
}
