//! Porta
//!
//! A typed async client for the 3scale Account Management API.
//!
//! ## Core Types
//!
//! - [`AdminPortal`] - Validated admin portal address (scheme, host, port, path prefix)
//! - [`ThreeScaleClient`] - Client handle bundling portal, credential and transport
//! - [`ThreeScaleClientBuilder`] - Timeout and default header configuration
//! - [`Endpoint`] - One admin API call: verb, path template, parameters and expected status
//! - [`Params`] - Open string-to-string attribute bag for queries and form bodies
//! - [`ApiError`] - Unified error for configuration, transport and response failures
//!
//! Resource operations are inherent methods on [`ThreeScaleClient`], grouped
//! by family: products, backend APIs, metrics, methods, mapping rules,
//! application plans, limits, pricing rules, proxies and policies, proxy
//! configs, developer accounts and users, ActiveDocs, the APIcast policy
//! registry, tenants and applications.
//!
//! ## Examples
//!
//! ```
//! use porta::{AdminPortal, Endpoint, RestMethod};
//! use porta::response::JsonFormat;
//!
//! let portal = AdminPortal::parse("https://acme-admin.3scale.net:443/").unwrap();
//! assert_eq!(portal.raw_url(), "https://acme-admin.3scale.net:443");
//!
//! let endpoint: Endpoint<JsonFormat<serde_json::Value>> =
//!     Endpoint::get("/admin/api/services/{id}.json").path_param("id", 42);
//! assert_eq!(endpoint.method(), RestMethod::Get);
//! assert_eq!(endpoint.path(), "/admin/api/services/42.json");
//! ```
//!
//! Errors returned by the portal carry the HTTP code and a readable reason:
//!
//! ```
//! let err = porta::ResponseError::new(404, "Not found");
//! assert_eq!(
//!     err.to_string(),
//!     "error calling 3scale system - reason: Not found - code: 404"
//! );
//! ```

pub mod admin_portal;
pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod models;
pub mod pagination;
pub mod params;
pub mod response;
pub mod transport;

mod resources;

pub use admin_portal::AdminPortal;
pub use auth::{AuthMethod, Credential};
pub use client::{ThreeScaleClient, ThreeScaleClientBuilder};
pub use endpoint::{Endpoint, Payload};
pub use error::{ApiError, ClientError, ConfigError, ResponseError, ValidationError};
pub use method::RestMethod;
pub use params::Params;
pub use response::ResponseFormat;
