//! Path management for happyheads files.
//!
//! Platform directories are resolved via AppPaths from the version-migrate
//! crate.
//!
//! ```text
//! ~/.config/happyheads/        # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/happyheads/   # Data directory
//! └── local_storage/           # One file per storage key
//! ```

use std::path::PathBuf;

use happyheads_core::config::AppConfig;
use happyheads_core::{HappyHeadsError, Result};
use version_migrate::AppPaths;

const APP_NAME: &str = "happyheads";
const LOCAL_STORAGE_DIR: &str = "local_storage";

pub struct HappyHeadsPaths;

impl HappyHeadsPaths {
    fn app_paths() -> AppPaths {
        AppPaths::new(APP_NAME)
    }

    pub fn config_dir() -> Result<PathBuf> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| HappyHeadsError::config("Cannot find config directory"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        Self::app_paths()
            .data_dir()
            .map_err(|_| HappyHeadsError::config("Cannot find data directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory backing local storage, honoring `storage_dir` when set.
    pub fn local_storage_dir(config: &AppConfig) -> Result<PathBuf> {
        match &config.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::data_dir()?.join(LOCAL_STORAGE_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_dir_override() {
        let config = AppConfig {
            storage_dir: Some(PathBuf::from("/tmp/hh-store")),
            ..AppConfig::default()
        };
        assert_eq!(
            HappyHeadsPaths::local_storage_dir(&config).unwrap(),
            PathBuf::from("/tmp/hh-store")
        );
    }

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = HappyHeadsPaths::config_file() {
            assert!(path.ends_with("happyheads/config.toml"));
        }
    }
}
