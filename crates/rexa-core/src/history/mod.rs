//! Persisted history of conversions.
//!
//! The whole history is one JSON array stored under the `history` key of a
//! [`BlobStore`]. Storage order is insertion order (newest first, since new
//! records are prepended); views sort by date via [`display_order`].
//!
//! Reads never fail: a missing key, unreadable store, malformed JSON or a
//! non-array value all load as an empty history.

mod order;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::record::ConversionRecord;
use crate::resource::Resolver;
use crate::storage::BlobStore;

pub use order::display_order;

/// Storage key holding the serialized history.
pub const HISTORY_KEY: &str = "history";

pub struct HistoryCache<S> {
    store: S,
    resolver: Resolver,
}

impl<S: BlobStore> HistoryCache<S> {
    pub fn new(store: S, resolver: Resolver) -> Self {
        Self { store, resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Loads the current snapshot, re-resolving every record's references.
    pub fn load(&self) -> Vec<ConversionRecord> {
        let raw = match self.store.get_item(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("history unreadable, treating as empty: {:#}", e);
                return Vec::new();
            }
        };
        parse_history(&raw)
            .into_iter()
            .map(|r| r.normalize(&self.resolver))
            .collect()
    }

    /// Writes `records` verbatim, replacing whatever was stored.
    pub fn save(&self, records: &[ConversionRecord]) -> Result<()> {
        let json = serde_json::to_string(records).context("serialize history")?;
        self.store
            .set_item(HISTORY_KEY, &json)
            .context("write history")?;
        tracing::debug!("saved {} history records", records.len());
        Ok(())
    }

    /// Stores `record` ahead of the current snapshot.
    ///
    /// An older record with the same id is replaced, keeping ids unique.
    pub fn prepend(&self, record: ConversionRecord) -> Result<()> {
        let existing = self.load();
        let mut records = Vec::with_capacity(existing.len() + 1);
        let id = record.id.clone();
        records.push(record);
        records.extend(existing.into_iter().filter(|r| r.id != id));
        self.save(&records)
    }

    /// Looks up one record in a fresh snapshot.
    pub fn find(&self, id: &str) -> Option<ConversionRecord> {
        self.load().into_iter().find(|r| r.id == id)
    }
}

/// Parses the stored blob; anything that is not an array of records yields
/// an empty list. Individual elements that are not record-shaped are skipped.
fn parse_history(raw: &str) -> Vec<ConversionRecord> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("history is not valid JSON, treating as empty: {}", e);
            return Vec::new();
        }
    };
    let Value::Array(items) = value else {
        tracing::warn!("history is not a JSON array, treating as empty");
        return Vec::new();
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("skipping malformed history entry {}: {}", i, e);
                None
            }
        })
        .collect()
}
