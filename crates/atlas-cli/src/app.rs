//! Wiring of the concrete adapters behind the application ports.

use anyhow::{Context, Result};
use atlas_application::SessionStore;
use atlas_core::backend::AtlasBackend;
use atlas_infrastructure::storage::{env_api_url, resolve_config};
use atlas_infrastructure::{ConfigStorage, FileKeyValueStore};
use atlas_interaction::AtlasApiClient;
use std::path::PathBuf;
use std::sync::Arc;

pub struct App {
    pub backend: Arc<dyn AtlasBackend>,
    pub store: Arc<SessionStore>,
}

impl App {
    /// Resolves configuration and builds the HTTP backend and file-backed session.
    pub fn build(api_url: Option<&str>, storage: Option<PathBuf>) -> Result<Self> {
        let config_storage = match ConfigStorage::new() {
            Ok(storage) => Some(storage),
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                None
            }
        };
        let env_url = env_api_url();
        let config = resolve_config(config_storage.as_ref(), env_url.as_deref(), api_url)
            .context("Failed to load configuration")?;

        let key_value_store = match storage {
            Some(path) => FileKeyValueStore::with_path(path),
            None => FileKeyValueStore::new().context("Failed to locate session storage")?,
        };
        tracing::debug!("Session storage: {}", key_value_store.path().display());

        let backend: Arc<dyn AtlasBackend> = Arc::new(AtlasApiClient::from_config(&config));
        let store = Arc::new(SessionStore::new(
            Arc::new(key_value_store),
            backend.clone(),
        ));

        Ok(Self { backend, store })
    }

    /// Restores the persisted session.
    ///
    /// A damaged session file is not fatal: the session stays anonymous and
    /// the next login or logout rewrites the file.
    pub async fn restore_session(&self) {
        if let Err(e) = self.store.restore_session().await {
            tracing::warn!("Could not restore session, continuing logged out: {}", e);
        }
    }
}
