//! Response decoding for `POST /convert`.

use serde::Deserialize;

use super::error::ConvertError;
use crate::record::ConversionPayload;
use crate::resource::Resolver;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

fn non_empty_string(v: Option<serde_json::Value>) -> Option<String> {
    match v {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Extracts a human-readable message from an error body: `message` first,
/// then `error`. Non-JSON bodies yield `None`.
pub fn service_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    non_empty_string(parsed.message).or_else(|| non_empty_string(parsed.error))
}

/// Turns a status code and body into a normalized payload or an error.
pub fn decode_response(
    status: u32,
    body: &[u8],
    resolver: &Resolver,
) -> Result<ConversionPayload, ConvertError> {
    if !(200..300).contains(&status) {
        let message = service_message(body);
        tracing::warn!("conversion failed: HTTP {} ({:?})", status, message);
        return Err(ConvertError::Service { status, message });
    }
    let payload: ConversionPayload = serde_json::from_slice(body)?;
    Ok(payload.normalize(resolver))
}
