//! Key/value blob storage backing the history cache.
//!
//! One key maps to one serialized string, like browser local storage. The
//! history only ever uses a single key; the abstraction exists so callers can
//! swap the on-disk store for an in-memory one.

mod file;
mod memory;

use anyhow::Result;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Synchronous string storage keyed by name.
pub trait BlobStore {
    /// Returns the stored value, or `None` if the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the stored value. Last write wins.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
