//! File-backed key-value store.
//!
//! Persists the session keys to `~/.config/atlas/local_storage.toml` so a
//! login survives across CLI invocations, the way browser local storage
//! survives a page reload.

use atlas_core::error::Result;
use atlas_core::session::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::atomic_toml::AtomicTomlFile;
use crate::paths::{AtlasPaths, PathError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LocalStorageFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// [`KeyValueStore`] persisted as a private TOML file.
///
/// Every write goes through a locked read-modify-write, so two processes
/// touching different keys never lose each other's updates. Reads of a file
/// that no longer parses fail; writes replace it, so `logout` can always
/// reset a damaged session file.
pub struct FileKeyValueStore {
    file: AtomicTomlFile<LocalStorageFile>,
}

impl FileKeyValueStore {
    /// Store at the default location (`<config_dir>/atlas/local_storage.toml`).
    pub fn new() -> std::result::Result<Self, PathError> {
        Ok(Self::with_path(AtlasPaths::local_storage_file()?))
    }

    /// Store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path).private(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.file.load()?.unwrap_or_default();
        Ok(data.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!("local storage: set {}", key);
        self.file.update(LocalStorageFile::default(), |data| {
            data.entries.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        // Nothing to remove and nothing to create.
        if !self.file.path().exists() {
            return Ok(());
        }
        tracing::debug!("local storage: remove {}", key);
        self.file.update(LocalStorageFile::default(), |data| {
            data.entries.remove(key);
            Ok(())
        })
    }
}
