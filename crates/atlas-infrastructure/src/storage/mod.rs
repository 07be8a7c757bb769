//! Storage layer for atomic file operations.

mod atomic_toml;
mod config_storage;
mod file_key_value_store;

pub use atomic_toml::AtomicTomlFile;
pub use config_storage::{ConfigStorage, env_api_url, resolve_config};
pub use file_key_value_store::FileKeyValueStore;
