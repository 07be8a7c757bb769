//! Key-value storage port.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AtlasError, Result};

/// Key holding the access token.
pub const TOKEN_KEY: &str = "atlas_token";
/// Key holding the logged-in username.
pub const USER_KEY: &str = "atlas_user";

/// Persistent string key-value store the session is mirrored into.
///
/// Mirrors the semantics of browser local storage: string keys, string values,
/// removing a missing key is not an error.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. A missing key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| AtlasError::storage(format!("Failed to lock store: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AtlasError::storage(format!("Failed to lock store: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AtlasError::storage(format!("Failed to lock store: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}
