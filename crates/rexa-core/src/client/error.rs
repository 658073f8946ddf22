//! Conversion error type and the user-facing message rules.

use thiserror::Error;

/// Shown when neither the service nor the transport explain the failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Conversion failed. Please try again.";

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The service answered with a non-2xx status.
    #[error("conversion service returned HTTP {status}")]
    Service { status: u32, message: Option<String> },
    /// Curl reported an error (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// The body was not a conversion payload.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The blocking request task did not complete.
    #[error("conversion task failed: {0}")]
    Join(String),
}

impl ConvertError {
    /// Message to show the user: the service's own message if it sent one,
    /// then the transport error text, then a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Service {
                message: Some(m), ..
            } => m.clone(),
            ConvertError::Service {
                status,
                message: None,
            } => format!("Request failed with status code {status}"),
            ConvertError::Transport(e) => {
                let text = e.to_string();
                if text.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    text
                }
            }
            ConvertError::Decode(_) | ConvertError::Join(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
