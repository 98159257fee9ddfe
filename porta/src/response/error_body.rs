//! Extraction of human-readable reasons from error bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// The XML error envelope, `<error>reason</error>`.
#[derive(Debug, Deserialize)]
struct XmlErrorBody {
    #[serde(rename = "$text", default)]
    text: String,
}

/// Extracts the text of an XML error envelope.
pub(crate) fn xml_reason(body: &[u8]) -> Result<String, ValidationError> {
    let envelope: XmlErrorBody = quick_xml::de::from_reader(body)?;
    Ok(envelope.text)
}

/// Flattens a JSON error object into a single `error - ...` line.
///
/// Fields are visited in key order. Each field contributes
/// ` - <field>: <messages>`, except the conventional `error` key which
/// contributes its messages alone. Nested objects are flattened in place.
pub(crate) fn json_reason(body: &[u8]) -> Result<String, ValidationError> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(fields) = value else {
        return Err(ValidationError::UnexpectedErrorBody {
            found: json_type(&value),
        });
    };

    let mut reason = String::from("error");
    flatten_into(&mut reason, &fields);
    Ok(reason)
}

fn flatten_into(reason: &mut String, fields: &Map<String, Value>) {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    for (field, value) in sorted {
        if let Value::Object(nested) = value {
            flatten_into(reason, nested);
            continue;
        }

        let messages = messages(value);
        if field == "error" {
            reason.push_str(&format!(" - {messages}"));
        } else {
            reason.push_str(&format!(" - {field}: {messages}"));
        }
    }
}

fn messages(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(scalar)
            .collect::<Vec<_>>()
            .join(", "),
        other => scalar(other),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
