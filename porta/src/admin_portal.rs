//! Admin portal endpoint resolution.
//!
//! An [`AdminPortal`] is the validated base URL every resource path is
//! resolved against. A path prefix on the base URL (for portals served behind
//! a reverse proxy, e.g. `https://host/example`) is preserved for every call.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ConfigError;

/// The base endpoint of a 3scale admin portal.
///
/// ## Examples
///
/// ```rust
/// use porta::AdminPortal;
///
/// let portal = AdminPortal::parse("https://www.test.com:443/example/").unwrap();
/// assert_eq!(portal.raw_url(), "https://www.test.com:443/example");
///
/// let url = portal.resolve("/admin/api/services.json").unwrap();
/// assert_eq!(url.path(), "/example/admin/api/services.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPortal {
    raw: String,
    base: Url,
    prefix: String,
}

impl AdminPortal {
    /// Builds a portal from its parts. A `port` of `0` leaves the port out
    /// of the URL so the scheme default applies.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::UnsupportedScheme`] unless `scheme` is `http`
    /// or `https`, and [`ConfigError::InvalidUrl`] if the host is invalid.
    pub fn new(scheme: &str, host: &str, port: u16) -> Result<Self, ConfigError> {
        check_scheme(scheme)?;
        let raw = match port {
            0 => format!("{scheme}://{host}"),
            port => format!("{scheme}://{host}:{port}"),
        };
        Self::parse(&raw)
    }

    /// Builds a portal from a complete URL, stripping one trailing slash.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] for unparsable input and
    /// [`ConfigError::UnsupportedScheme`] for anything but `http`/`https`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.strip_suffix('/').unwrap_or(raw);
        let base = Url::parse(raw)?;
        check_scheme(base.scheme())?;

        let prefix = base.path().trim_end_matches('/').to_string();

        Ok(Self {
            raw: raw.to_string(),
            base,
            prefix,
        })
    }

    /// The configured URL, minus its trailing slash.
    pub fn raw_url(&self) -> &str {
        &self.raw
    }

    /// The parsed base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The preserved path prefix; empty when the portal is served at `/`.
    pub fn path_prefix(&self) -> &str {
        &self.prefix
    }

    /// The URL scheme.
    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// The host name.
    pub fn host(&self) -> Option<&str> {
        self.base.host_str()
    }

    /// The effective port, falling back to the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.base.port_or_known_default()
    }

    /// Resolves a resource path (starting with `/`) to an absolute URL whose
    /// path is `<prefix><path>`.
    ///
    /// ## Errors
    ///
    /// Returns the parse error if the joined reference is not a valid URL.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base.join(&format!("{}{}", self.prefix, path))
    }
}

impl FromStr for AdminPortal {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AdminPortal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn check_scheme(scheme: &str) -> Result<(), ConfigError> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::unsupported_scheme(other)),
    }
}
