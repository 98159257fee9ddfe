//! Response body decoding errors.

use thiserror::Error;

/// Errors while decoding a response body.
///
/// The client never returns these directly: they are folded into a
/// [`ResponseError`](super::ResponseError) carrying the HTTP status of the
/// response that failed to decode.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON decoding failed.
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),

    /// XML decoding failed.
    #[error(transparent)]
    XmlParse(#[from] quick_xml::DeError),

    /// A JSON error body was valid JSON but not an object.
    #[error("unexpected JSON error body: {found}")]
    UnexpectedErrorBody {
        /// The JSON type that was found instead.
        found: &'static str,
    },
}

impl ValidationError {
    /// Name of the wire format that failed to decode.
    pub fn format(&self) -> &'static str {
        match self {
            Self::JsonParse(_) | Self::UnexpectedErrorBody { .. } => "json",
            Self::XmlParse(_) => "xml",
        }
    }
}
