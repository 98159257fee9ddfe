//! Layered error types for the porta crate.
//!
//! The error hierarchy mirrors the lifetime of a call:
//! - [`ConfigError`] - Admin portal and client construction errors
//! - [`ClientError`] - Request building and transport errors
//! - [`ValidationError`] - Body decoding errors (always wrapped before surfacing)
//! - [`ResponseError`] - The structured error returned by the 3scale API
//! - [`ApiError`] - Top-level error type for all client operations

mod api_error;
mod client_error;
mod config_error;
mod response_error;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use response_error::ResponseError;
pub use validation_error::ValidationError;
