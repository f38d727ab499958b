//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml`
//! (~/.config/happyheads/config.toml by default). A missing file is created
//! with defaults.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use happyheads_core::config::AppConfig;
use happyheads_core::Result;
use version_migrate::Migrator;

use crate::dto::create_app_config_migrator;
use crate::paths::HappyHeadsPaths;
use crate::storage::AtomicTomlFile;

/// Loads and caches the application configuration.
#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    migrator: Arc<Migrator>,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Uses the platform config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(HappyHeadsPaths::config_file()?))
    }

    /// Uses a custom config file path (for tests and `--config`).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            migrator: Arc::new(create_app_config_migrator()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the configuration, loading it from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = None;
    }

    /// Writes `config` to file and refreshes the cache.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        self.write_file(config)?;

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(config.clone());
        Ok(())
    }

    fn load_config(&self) -> Result<AppConfig> {
        let file = AtomicTomlFile::<toml::Value>::new(self.path.clone());
        match file.load()? {
            Some(mut value) => {
                // Files written by hand may omit the schema version.
                if let Some(table) = value.as_table_mut() {
                    table
                        .entry("version")
                        .or_insert_with(|| toml::Value::String("1.0.0".to_string()));
                }
                let config: AppConfig = self.migrator.load_flat_from("app_config", value)?;
                tracing::debug!(path = %self.path.display(), "Loaded config");
                Ok(config)
            }
            None => {
                let config = AppConfig::default();
                tracing::info!(path = %self.path.display(), "Writing default config");
                self.write_file(&config)?;
                Ok(config)
            }
        }
    }

    fn write_file(&self, config: &AppConfig) -> Result<()> {
        let json = self.migrator.save_domain_flat("app_config", config.clone())?;
        let value: toml::Value = serde_json::from_str(&json)?;
        AtomicTomlFile::<toml::Value>::new(self.path.clone()).save(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());

        let config = service.get_config().unwrap();
        assert_eq!(config, AppConfig::default());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("storage_namespace = \"happyheads\""));
        assert!(written.contains("version = \"1.0.0\""));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sign_in_delay_ms = 0\nlog_level = \"debug\"\n").unwrap();

        let config = ConfigService::with_path(path).get_config().unwrap();
        assert_eq!(config.sign_in_delay_ms, 0);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage_namespace, "happyheads");
    }

    #[test]
    fn test_cache_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());
        service.get_config().unwrap();

        fs::write(&path, "version = \"1.0.0\"\nstorage_namespace = \"demo\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().storage_namespace, "happyheads");

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().storage_namespace, "demo");
    }

    #[test]
    fn test_save_config_round_trips_storage_dir() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        let config = AppConfig {
            storage_dir: Some(dir.path().join("store")),
            ..AppConfig::default()
        };
        service.save_config(&config).unwrap();
        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap(), config);
    }
}
