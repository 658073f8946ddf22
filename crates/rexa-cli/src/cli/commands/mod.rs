//! CLI command handlers. Each command is in its own file.

mod completions;
mod convert;
mod examples;
mod history;
mod resolve;
mod show;

pub use completions::run_completions;
pub use convert::run_convert;
pub use examples::run_examples;
pub use history::run_history;
pub use resolve::run_resolve;
pub use show::run_show;

use anyhow::Result;
use rexa_core::config::RexaConfig;
use rexa_core::history::HistoryCache;
use rexa_core::resource::Resolver;
use rexa_core::storage::FileBlobStore;

/// Opens the on-disk history configured for this run.
pub(crate) fn open_history(cfg: &RexaConfig) -> Result<HistoryCache<FileBlobStore>> {
    let store = match &cfg.history_dir {
        Some(dir) => FileBlobStore::new(dir),
        None => FileBlobStore::open_default()?,
    };
    tracing::debug!("history at {}", store.dir().display());
    Ok(HistoryCache::new(store, Resolver::new(&cfg.api_base_url)))
}
