//! Response body handling.
//!
//! Successful responses wrap their payload as `{"data": ...}`; the transport
//! hands callers only the decoded `data`. Error responses carry an `error`
//! field that is turned into a user-facing message.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use rewrite_core::constants::GENERIC_ERROR_MESSAGE;
use rewrite_core::error::{RwError, RwResult};

/// Parse `body` as a JSON object. Arrays and scalars are not envelopes.
fn parse_envelope(body: &[u8]) -> Result<Map<String, Value>, String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode the `data` field of a success body into `T`.
///
/// Returns `Ok(None)` for an empty body, a missing `data` field, or
/// `"data": null`.
pub fn decode_data<T: DeserializeOwned>(body: &[u8]) -> RwResult<Option<T>> {
    if body.is_empty() {
        return Ok(None);
    }

    let mut envelope = parse_envelope(body)
        .map_err(|e| RwError::Decode(format!("invalid response envelope: {e}")))?;

    let Some(data) = envelope.remove("data").filter(|d| !d.is_null()) else {
        debug!("response envelope carried no data");
        return Ok(None);
    };

    serde_json::from_value(data)
        .map(Some)
        .map_err(|e| RwError::Decode(format!("failed to decode response data: {e}")))
}

/// Extract a user-facing message from an error response body.
///
/// - `{"error": "text"}` gives `text`
/// - `{"error": {"message": "text"}}` gives `text`
/// - any other `error` value gives its JSON text
/// - an empty body gives `"Request failed"`
/// - anything else gives the raw body
pub fn error_message(body: &[u8]) -> String {
    if body.is_empty() {
        return GENERIC_ERROR_MESSAGE.to_string();
    }

    if let Some(error) = parse_envelope(body).ok().and_then(|mut map| map.remove("error")) {
        return match error {
            Value::Null => String::from_utf8_lossy(body).into_owned(),
            Value::String(message) => message,
            Value::Object(ref map) => match map.get("message") {
                Some(Value::String(message)) if !message.is_empty() => message.clone(),
                _ => error.to_string(),
            },
            other => other.to_string(),
        };
    }

    String::from_utf8_lossy(body).into_owned()
}
