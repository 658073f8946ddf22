//! Directory-backed blob store: `<dir>/<key>.json`, written atomically.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{BlobStore, TEMP_SUFFIX};

#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location: `~/.local/state/rexa/`.
    pub fn default_dir() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("rexa")?;
        Ok(xdg_dirs.get_state_home())
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the value for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create dir: {}", self.dir.display()))?;
        let path = self.path_for(key);
        let mut temp = path.clone().into_os_string();
        temp.push(TEMP_SUFFIX);
        let temp = PathBuf::from(temp);
        fs::write(&temp, value).with_context(|| format!("write {}", temp.display()))?;
        fs::rename(&temp, &path)
            .with_context(|| format!("rename {} -> {}", temp.display(), path.display()))?;
        Ok(())
    }
}
