//! Decoding strategies for the two admin API wire formats.
//!
//! The [`ResponseFormat`] trait defines how a body is decoded into a typed
//! value on success and how a reason is extracted from it on failure.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use super::error_body;
use crate::error::ValidationError;

/// Trait for wire format decoding strategies.
///
/// ## Examples
///
/// ```rust,ignore
/// use porta::response::{ResponseFormat, JsonFormat};
///
/// // The format type encodes both the decoding strategy and output type
/// type ProductResponse = JsonFormat<Product>;
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The output type after decoding.
    type Output: Send;

    /// Decodes a success body into the output type.
    fn parse(body: &[u8]) -> Result<Self::Output, ValidationError>;

    /// Extracts the reason from an error body.
    fn parse_error(body: &[u8]) -> Result<String, ValidationError>;

    /// The `Accept` header value for this format.
    fn content_type() -> &'static str;
}

/// JSON format with typed deserialization.
///
/// ## Type Parameters
///
/// - `T`: The type to deserialize the JSON into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned + Send> ResponseFormat for JsonFormat<T> {
    type Output = T;

    fn parse(body: &[u8]) -> Result<Self::Output, ValidationError> {
        serde_json::from_slice(body).map_err(ValidationError::JsonParse)
    }

    fn parse_error(body: &[u8]) -> Result<String, ValidationError> {
        error_body::json_reason(body)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// XML format used by the legacy endpoint generation.
///
/// ## Type Parameters
///
/// - `X`: The type to deserialize the XML into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct XmlFormat<X>(PhantomData<fn() -> X>);

impl<X: DeserializeOwned + Send> ResponseFormat for XmlFormat<X> {
    type Output = X;

    fn parse(body: &[u8]) -> Result<Self::Output, ValidationError> {
        quick_xml::de::from_reader(body).map_err(ValidationError::XmlParse)
    }

    fn parse_error(body: &[u8]) -> Result<String, ValidationError> {
        error_body::xml_reason(body)
    }

    fn content_type() -> &'static str {
        "application/xml"
    }
}
