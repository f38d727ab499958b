//! Atomic TOML file operations.
//!
//! Provides a thin typed layer over [`write_atomic`] for configuration files.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use happyheads_core::Result;
use serde::{de::DeserializeOwned, Serialize};

use super::atomic_file::{write_atomic, FileLock};

/// A handle to a TOML file that is always replaced whole.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
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

        Ok(Some(toml::from_str(&content)?))
    }

    /// Serializes `data` and replaces the file atomically.
    pub fn save(&self, data: &T) -> Result<()> {
        let toml_string = toml::to_string_pretty(data)?;
        write_atomic(&self.path, toml_string.as_bytes())
    }

    /// Loads (or starts from `default_value`), applies `f` and saves, all
    /// under an exclusive lock.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.path)?;
        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Settings {
        namespace: String,
        delay_ms: u64,
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Settings>::new(temp_dir.path().join("missing.toml"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.toml");
        fs::write(&path, "  \n").unwrap();
        assert!(AtomicTomlFile::<Settings>::new(path).load().unwrap().is_none());
    }

    #[test]
    fn test_update_starts_from_default() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Settings>::new(temp_dir.path().join("config.toml"));
        let default = Settings {
            namespace: "happyheads".to_string(),
            delay_ms: 1000,
        };

        file.update(default.clone(), |settings| {
            settings.delay_ms = 0;
            Ok(())
        })
        .unwrap();
        file.update(default, |settings| {
            settings.namespace = "demo".to_string();
            Ok(())
        })
        .unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.namespace, "demo");
        assert_eq!(loaded.delay_ms, 0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "namespace = [").unwrap();
        let err = AtomicTomlFile::<Settings>::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            happyheads_core::HappyHeadsError::Serialization { .. }
        ));
    }
}
