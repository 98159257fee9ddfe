//! Wire formats for decoding admin API responses.
//!
//! Each endpoint generation speaks exactly one format. The format is a type
//! parameter of [`Endpoint`](crate::Endpoint), so an XML endpoint can never be
//! decoded as JSON by accident.

mod error_body;
mod format;

pub use format::{JsonFormat, ResponseFormat, XmlFormat};
