//! Atomic TOML file operations.
//!
//! Provides a thin layer for safe concurrent access to small TOML files.

use atlas_core::error::{AtlasError, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A handle to a TOML file that is replaced atomically on every write.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: File locking prevents concurrent read-modify-write races
/// - **Durability**: Explicit fsync before rename
/// - **Privacy**: Optional `0600` permissions for files holding credentials
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    private: bool,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic TOML file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            private: false,
            _phantom: PhantomData,
        }
    }

    /// Restricts the file to the current user (Unix `0600`) on every save.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the file atomically.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        if self.private {
            restrict_permissions(&tmp_path)?;
        }
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a locked read-modify-write.
    ///
    /// `f` receives the current data, or `default_value` when the file is
    /// missing or no longer parses. The result is written back only when `f`
    /// returns `Ok`.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = match self.load() {
            Ok(data) => data.unwrap_or(default_value),
            Err(AtlasError::Decode { message, .. }) => {
                tracing::warn!(
                    "Resetting unreadable {}: {}",
                    self.path.display(),
                    message
                );
                default_value
            }
            Err(e) => return Err(e),
        };
        f(&mut data)?;
        self.save(&data)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| AtlasError::storage("Path has no parent directory"))?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AtlasError::storage("Path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// A file lock guard; the lock is released when the handle is dropped.
///
/// The lock file itself stays on disk. Removing it would let a later process
/// lock a fresh inode while a waiter still holds the old one.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtlasError::storage(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entries {
        values: BTreeMap<String, String>,
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Entries>::new(temp_dir.path().join("missing.toml"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_update_creates_and_modifies() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Entries>::new(temp_dir.path().join("kv.toml"));
        let empty = Entries {
            values: BTreeMap::new(),
        };

        file.update(empty.clone(), |data| {
            data.values.insert("a".to_string(), "1".to_string());
            Ok(())
        })
        .unwrap();
        file.update(empty, |data| {
            data.values.insert("b".to_string(), "2".to_string());
            Ok(())
        })
        .unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.values.len(), 2);
        assert_eq!(loaded.values["a"], "1");
    }

    #[test]
    fn test_failed_update_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.toml");
        let file = AtomicTomlFile::<Entries>::new(path.clone());
        let empty = Entries {
            values: BTreeMap::new(),
        };

        let result = file.update(empty, |_| Err(AtlasError::storage("boom")));
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_lock_file_is_kept_and_reused() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.toml");
        let file = AtomicTomlFile::<Entries>::new(path.clone());
        file.update(
            Entries {
                values: BTreeMap::new(),
            },
            |_| Ok(()),
        )
        .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".kv.toml.tmp").exists());
        assert!(temp_dir.path().join("kv.lock").exists());

        file.update(
            Entries {
                values: BTreeMap::new(),
            },
            |data| {
                data.values.insert("c".to_string(), "3".to_string());
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(file.load().unwrap().unwrap().values["c"], "3");
    }

    #[test]
    fn test_update_replaces_unparseable_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.toml");
        fs::write(&path, "values = [not toml").unwrap();
        let file = AtomicTomlFile::<Entries>::new(path);

        assert!(file.load().is_err());
        file.update(
            Entries {
                values: BTreeMap::new(),
            },
            |data| {
                data.values.insert("a".to_string(), "1".to_string());
                Ok(())
            },
        )
        .unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.values.len(), 1);
        assert_eq!(loaded.values["a"], "1");
    }

    #[cfg(unix)]
    #[test]
    fn test_private_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.toml");
        let file = AtomicTomlFile::<Entries>::new(path.clone()).private();
        file.save(&Entries {
            values: BTreeMap::new(),
        })
        .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
