//! Response decoding shared by the browser client and the CLI.
//!
//! The backend is not consistent about list wrappers or error bodies, so
//! both are normalized here before any screen sees them.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A collection response in any of the shapes the backend emits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Results { results: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Results { results: items } | Self::Data { data: items } => items,
        }
    }
}

/// Decode a collection body into its rows.
///
/// # Errors
///
/// Returns the `serde_json` error when the body matches none of the
/// accepted shapes.
pub fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_value::<ListEnvelope<T>>(body).map(ListEnvelope::into_items)
}

/// Decode a single record, unwrapping a `{"data": {...}}` wrapper if present.
///
/// # Errors
///
/// Returns the `serde_json` error from decoding the unwrapped body.
pub fn decode_one<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    match body {
        Value::Object(mut map) if map.len() == 1 && map.contains_key("data") => {
            serde_json::from_value(map.remove("data").unwrap_or(Value::Null))
        }
        other => serde_json::from_value(other),
    }
}

/// Bearer token from a login response (`access`, `token` or `key`).
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    ["access", "token", "key"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
}

/// Human-readable message for a failed response.
#[must_use]
pub fn error_message(status: u16, body: &Value) -> String {
    if status == 401 {
        return "Session expired or unauthorized".to_owned();
    }
    summarize(body).unwrap_or_else(|| format!("request failed (HTTP {status})"))
}

fn summarize(body: &Value) -> Option<String> {
    match body {
        Value::String(text) => Some(text.trim().to_owned()).filter(|t| !t.is_empty()),
        Value::Array(items) => items.iter().find_map(summarize),
        Value::Object(map) => {
            for key in ["detail", "message", "error"] {
                if let Some(text) = map.get(key).and_then(summarize) {
                    return Some(text);
                }
            }
            if let Some(text) = map.get("non_field_errors").and_then(summarize) {
                return Some(text);
            }
            map.iter()
                .find_map(|(field, value)| summarize(value).map(|text| format!("{field}: {text}")))
        }
        _ => None,
    }
}
