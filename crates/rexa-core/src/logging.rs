//! Logging setup.
//!
//! The CLI appends to `rexa.log` in the XDG state directory. When that file
//! cannot be opened, `main` falls back to [`init_logging_stderr`].

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,rexa_core=debug,rexa=debug";
const LOG_FILE_NAME: &str = "rexa.log";

/// `RUST_LOG` when set and valid, otherwise the crate default.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/rexa/rexa.log`, with its directory created.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rexa")?;
    xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create log directory")
}

/// Installs the file subscriber and returns the log path.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!("rexa logging to {}", path.display());
    Ok(path)
}

/// Stderr-only logging. A subscriber that is already installed is kept.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
