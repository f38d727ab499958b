//! Low-level file primitives shared by the storage backends.
//!
//! - **Atomicity**: writes go to a hidden tmp file that is renamed over the target
//! - **Durability**: the tmp file is fsynced before the rename
//! - **Isolation**: [`FileLock`] serializes read-modify-write cycles

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use happyheads_core::{HappyHeadsError, Result};

/// Writes `contents` to `path` via tmp file + fsync + rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = sibling_path(path, "tmp")?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Returns `.{file_name}.{suffix}` next to `path`.
pub(crate) fn sibling_path(path: &Path, suffix: &str) -> Result<PathBuf> {
    let parent = path
        .parent()
        .ok_or_else(|| HappyHeadsError::io(format!("{} has no parent directory", path.display())))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| HappyHeadsError::io(format!("{} has no file name", path.display())))?;
    Ok(parent.join(format!(".{}.{}", file_name.to_string_lossy(), suffix)))
}

/// Exclusive lock guard, released on drop.
///
/// The lock file is never removed, so every locker contends on the same inode.
pub struct FileLock {
    file: File,
}

impl FileLock {
    /// Blocks until an exclusive lock for `path` is held.
    pub fn acquire(path: &Path) -> Result<Self> {
        let lock_path = sibling_path(path, "lock")?;

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

        file.lock_exclusive()
            .map_err(|e| HappyHeadsError::io(format!("Failed to acquire lock: {e}")))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_leaves_no_tmp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("value");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp_dir.path().join("nested").join(".value.tmp").exists());
    }

    #[test]
    fn test_lock_is_reacquirable_after_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("value");
        let lock_path = temp_dir.path().join(".value.lock");

        {
            let _lock = FileLock::acquire(&path).unwrap();
            assert!(lock_path.exists());
        }
        assert!(lock_path.exists());
        let _again = FileLock::acquire(&path).unwrap();
    }
}
