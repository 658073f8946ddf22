use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::record::RecordIdFormat;

/// Environment variable that overrides `api_base_url` from the config file.
pub const API_BASE_ENV: &str = "REXA_API_BASE_URL";

/// Base origin used when neither config nor environment provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Global configuration loaded from `~/.config/rexa/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RexaConfig {
    /// Origin of the conversion service; resource references are resolved against it.
    pub api_base_url: String,
    /// Connect timeout for the conversion request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for the conversion request, in seconds.
    pub request_timeout_secs: u64,
    /// Delay before a missing result redirects back to the entry view.
    pub redirect_delay_ms: u64,
    /// How often `show` re-reads the history while waiting for a record.
    pub poll_interval_ms: u64,
    /// Record id format: "uuid" (default) or "timestamp".
    #[serde(default)]
    pub record_ids: RecordIdFormat,
    /// Optional directory for the history blob (None = XDG state dir).
    #[serde(default)]
    pub history_dir: Option<PathBuf>,
}

impl Default for RexaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            redirect_delay_ms: 3000,
            poll_interval_ms: 250,
            record_ids: RecordIdFormat::default(),
            history_dir: None,
        }
    }
}

impl RexaConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply an environment override for the API base (ignored when empty).
    pub fn apply_api_base_override(&mut self, value: Option<&str>) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            tracing::debug!("api base overridden: {} -> {}", self.api_base_url, v);
            self.api_base_url = v.to_string();
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rexa")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// `REXA_API_BASE_URL` is applied on top of whatever the file says.
pub fn load_or_init() -> Result<RexaConfig> {
    let path = config_path()?;
    let mut cfg = if !path.exists() {
        let default_cfg = RexaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    } else {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("read config: {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?
    };

    cfg.apply_api_base_override(std::env::var(API_BASE_ENV).ok().as_deref());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RexaConfig::default();
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
        assert_eq!(cfg.redirect_delay(), Duration::from_millis(3000));
        assert_eq!(cfg.record_ids, RecordIdFormat::Uuid);
        assert!(cfg.history_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RexaConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RexaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.api_base_url, cfg.api_base_url);
        assert_eq!(parsed.redirect_delay_ms, cfg.redirect_delay_ms);
        assert_eq!(parsed.poll_interval_ms, cfg.poll_interval_ms);
        assert_eq!(parsed.record_ids, cfg.record_ids);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            api_base_url = "https://automata.example.org/api/"
            connect_timeout_secs = 5
            request_timeout_secs = 10
            redirect_delay_ms = 1500
            poll_interval_ms = 100
            record_ids = "timestamp"
            history_dir = "/tmp/rexa"
        "#;
        let cfg: RexaConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api_base_url, "https://automata.example.org/api/");
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.redirect_delay(), Duration::from_millis(1500));
        assert_eq!(cfg.record_ids, RecordIdFormat::Timestamp);
        assert_eq!(cfg.history_dir, Some(PathBuf::from("/tmp/rexa")));
    }

    #[test]
    fn config_toml_optional_fields_default() {
        let toml = r#"
            api_base_url = "http://127.0.0.1:9000"
            connect_timeout_secs = 5
            request_timeout_secs = 10
            redirect_delay_ms = 3000
            poll_interval_ms = 0
        "#;
        let cfg: RexaConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.record_ids, RecordIdFormat::Uuid);
        assert!(cfg.history_dir.is_none());
        assert_eq!(cfg.poll_interval(), Duration::from_millis(1));
    }

    #[test]
    fn api_base_override_ignores_empty() {
        let mut cfg = RexaConfig::default();
        cfg.apply_api_base_override(Some("   "));
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        cfg.apply_api_base_override(None);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        cfg.apply_api_base_override(Some("https://svc.example"));
        assert_eq!(cfg.api_base_url, "https://svc.example");
    }
}
