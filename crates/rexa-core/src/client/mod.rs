//! Conversion service client.
//!
//! Uses the curl crate (libcurl) to POST the regex to `<api base>/convert`
//! and decodes the returned resource references. The payload is normalized
//! through the resolver before it is handed back.

mod error;
mod response;

use serde::Serialize;
use std::time::Duration;

use crate::config::RexaConfig;
use crate::record::ConversionPayload;
use crate::resource::Resolver;

pub use error::{ConvertError, GENERIC_FAILURE_MESSAGE};
pub use response::{decode_response, service_message};

/// Path of the conversion endpoint, relative to the API base.
pub const CONVERT_PATH: &str = "/convert";

/// Anything that can turn a regex into a conversion payload.
///
/// Implementations block; call from `spawn_blocking` if used from async code.
pub trait ConversionService {
    fn convert(&self, regex: &str) -> Result<ConversionPayload, ConvertError>;
}

#[derive(Serialize)]
struct ConvertRequest<'a> {
    regex: &'a str,
}

/// HTTP client for the external conversion service.
#[derive(Debug, Clone)]
pub struct HttpConversionClient {
    endpoint: String,
    resolver: Resolver,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpConversionClient {
    pub fn new(cfg: &RexaConfig) -> Self {
        let resolver = Resolver::new(&cfg.api_base_url);
        Self {
            endpoint: resolver.base().join_rooted(CONVERT_PATH),
            resolver,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ConversionService for HttpConversionClient {
    /// Sends `{"regex": ...}` as JSON. No retries: failures go straight back
    /// to the caller.
    fn convert(&self, regex: &str) -> Result<ConversionPayload, ConvertError> {
        let body = serde_json::to_vec(&ConvertRequest { regex })?;
        let mut response: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&self.endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(&body)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        headers.append("Accept: application/json")?;
        easy.http_headers(headers)?;

        tracing::debug!("POST {} ({} bytes)", self.endpoint, body.len());
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!("POST {} returned HTTP {}", self.endpoint, status);
        decode_response(status, &response, &self.resolver)
    }
}
