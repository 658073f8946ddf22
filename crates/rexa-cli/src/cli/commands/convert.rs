//! `rexa convert <regex>` – convert, record, then show the result.

use anyhow::Result;
use chrono::Utc;
use rexa_core::client::{ConvertError, HttpConversionClient};
use rexa_core::config::RexaConfig;
use rexa_core::submit::{submit, SubmitError};

use super::{open_history, run_show};

pub async fn run_convert(cfg: &RexaConfig, regex: &str) -> Result<()> {
    let client = HttpConversionClient::new(cfg);
    let history = open_history(cfg)?;
    let ids = cfg.record_ids;
    let input = regex.to_string();

    println!("Converting...");
    let outcome = tokio::task::spawn_blocking(move || submit(&input, &client, &history, ids, Utc::now()))
        .await
        .unwrap_or_else(|e| Err(SubmitError::from(ConvertError::Join(e.to_string()))));

    match outcome {
        Ok(record) => run_show(cfg, &record.id, true).await,
        Err(e) => {
            tracing::warn!("convert failed: {}", e);
            anyhow::bail!("{}", e.user_message())
        }
    }
}
