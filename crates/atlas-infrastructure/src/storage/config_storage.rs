//! Config file storage.
//!
//! Reads `~/.config/atlas/config.toml` and layers the environment and
//! command-line overrides on top.

use atlas_core::config::{API_URL_ENV, AtlasConfig};
use atlas_core::error::{AtlasError, Result};
use std::path::{Path, PathBuf};

use super::atomic_toml::AtomicTomlFile;
use crate::paths::{AtlasPaths, PathError};

/// Storage for `config.toml`.
///
/// Responsibilities:
/// - Load `config.toml` into [`AtlasConfig`]
/// - Fall back to defaults when the file is missing or empty
///
/// Does NOT:
/// - Create the file
/// - Validate that the configured URL is reachable
pub struct ConfigStorage {
    file: AtomicTomlFile<AtlasConfig>,
}

impl ConfigStorage {
    /// Storage at the default path (`<config_dir>/atlas/config.toml`).
    pub fn new() -> std::result::Result<Self, PathError> {
        Ok(Self::with_path(AtlasPaths::config_file()?))
    }

    /// Storage at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the config, returning defaults when the file is absent.
    ///
    /// A file that does not parse is reported as [`AtlasError::Config`].
    pub fn load(&self) -> Result<AtlasConfig> {
        match self.file.load() {
            Ok(config) => Ok(config.unwrap_or_default()),
            Err(AtlasError::Decode { message, .. }) => Err(AtlasError::config(format!(
                "Invalid {}: {}",
                self.path().display(),
                message
            ))),
            Err(e) => Err(e),
        }
    }
}

/// Resolves the effective configuration.
///
/// Priority (highest first):
/// 1. `flag_url` (command-line `--api-url`)
/// 2. `env_url` (the `ATLAS_API_URL` environment variable)
/// 3. `config.toml`
/// 4. built-in defaults
pub fn resolve_config(
    storage: Option<&ConfigStorage>,
    env_url: Option<&str>,
    flag_url: Option<&str>,
) -> Result<AtlasConfig> {
    let base = match storage {
        Some(storage) => storage.load()?,
        None => AtlasConfig::default(),
    };
    let config = base.with_api_base_url(env_url).with_api_base_url(flag_url);
    tracing::debug!("Resolved API base URL: {}", config.api_base_url);
    Ok(config)
}

/// Reads the base URL override from the process environment.
pub fn env_api_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}
