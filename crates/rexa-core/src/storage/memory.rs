//! In-memory blob store for tests and ephemeral sessions.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use super::BlobStore;

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value, e.g. a corrupt history blob.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_overwrite() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v1").unwrap();
        store.set_item("k", "v2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn seeded_value() {
        let store = MemoryBlobStore::with_item("history", "not json");
        assert_eq!(store.get_item("history").unwrap().as_deref(), Some("not json"));
    }
}
