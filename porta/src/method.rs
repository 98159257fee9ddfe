//! HTTP verbs used by the admin API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by admin API endpoints.
///
/// ## Examples
///
/// ```rust
/// use porta::RestMethod;
///
/// assert!(RestMethod::Put.is_write());
/// assert!(!RestMethod::Get.is_write());
///
/// let parsed: RestMethod = "PATCH".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Patch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a resource or a collection.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Update a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` for verbs that modify server state.
    ///
    /// Write verbs carry their parameters (and the credential, for the
    /// parameter convention) in the request body rather than the query.
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
