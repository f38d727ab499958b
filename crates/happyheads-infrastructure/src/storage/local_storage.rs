//! Device-local key-value storage.
//!
//! Each key is a file in one directory holding its raw string value. Writes
//! replace the whole file atomically, so a reader never observes a partial
//! value.

use std::fs;
use std::path::{Path, PathBuf};

use happyheads_core::{HappyHeadsError, Result};

use super::atomic_file::{write_atomic, FileLock};

/// Directory-backed string store keyed like browser local storage.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the stored value, or `None` when the key was never written.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let _lock = FileLock::acquire(&path)?;
        write_atomic(&path, value.as_bytes())?;
        tracing::debug!(key, bytes = value.len(), "Stored local storage item");
        Ok(())
    }

    /// Removes a key. Removing an absent key succeeds.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let _lock = FileLock::acquire(&path)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "Removed local storage item");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read-modify-write of one key under an exclusive lock.
    ///
    /// `f` receives the current value and returns the value to store.
    pub fn update_item<F>(&self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(Option<String>) -> Result<String>,
    {
        let path = self.key_path(key)?;
        let _lock = FileLock::acquire(&path)?;
        let current = self.get_item(key)?;
        let next = f(current)?;
        write_atomic(&path, next.as_bytes())
    }

    /// Keys currently stored, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_valid_key(&name) {
                keys.push(name);
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(HappyHeadsError::validation(
                "key",
                format!("'{key}' must match [A-Za-z0-9_.-]+ and not start with '.'"),
            ));
        }
        Ok(self.root.join(key))
    }
}

/// Keys map to file names, so only a conservative character set is allowed.
/// A leading dot is reserved for tmp and lock files.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
