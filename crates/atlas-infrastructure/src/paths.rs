//! Unified path management for atlas files.
//!
//! All configuration and client-side storage paths are resolved here so every
//! platform uses the same layout.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for atlas.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/atlas/             # Config directory (platform equivalent elsewhere)
/// ├── config.toml              # API base URL
/// └── local_storage.toml       # Persisted session keys (0600)
/// ```
pub struct AtlasPaths;

impl AtlasPaths {
    const APP_DIR: &'static str = "atlas";

    /// Returns the atlas configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session store.
    ///
    /// # Security Note
    ///
    /// This file holds the access token and is written with `0600`
    /// permissions on Unix.
    pub fn local_storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("local_storage.toml"))
    }
}
