use serde_json::Value;

use crate::transport::casing::normalize_keys;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn encode_payload(payload: Option<&Value>) -> Result<Option<String>, serde_json::Error> {
    payload.map(serde_json::to_string).transpose()
}

/// Parse a response body and normalize its keys to camelCase.
pub fn decode_json_response(body: &str) -> Result<Value, TransportError> {
    let raw: Value = serde_json::from_str(body)?;
    Ok(normalize_keys(raw))
}

/// The server's own `message` field, if the body carries one.
///
/// Non-string messages are rendered as JSON text; `null` counts as absent.
pub fn server_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
