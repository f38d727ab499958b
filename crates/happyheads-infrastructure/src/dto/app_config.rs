//! AppConfig DTOs and migrations

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use happyheads_core::config::{
    AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_NAMESPACE, DEFAULT_SIGN_IN_DELAY_MS,
};

/// config.toml V1.0.0
///
/// Every field has a default so a hand-edited file may list only the
/// settings it changes.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct AppConfigV1_0_0 {
    #[serde(default = "default_namespace")]
    pub storage_namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    #[serde(default = "default_sign_in_delay_ms")]
    pub sign_in_delay_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_sign_in_delay_ms() -> u64 {
    DEFAULT_SIGN_IN_DELAY_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl IntoDomain<AppConfig> for AppConfigV1_0_0 {
    fn into_domain(self) -> AppConfig {
        AppConfig {
            storage_namespace: self.storage_namespace,
            storage_dir: self.storage_dir,
            sign_in_delay_ms: self.sign_in_delay_ms,
            log_level: self.log_level,
        }
    }
}

impl FromDomain<AppConfig> for AppConfigV1_0_0 {
    fn from_domain(config: AppConfig) -> Self {
        AppConfigV1_0_0 {
            storage_namespace: config.storage_namespace,
            storage_dir: config.storage_dir,
            sign_in_delay_ms: config.sign_in_delay_ms,
            log_level: config.log_level,
        }
    }
}

/// Creates a Migrator for the application config.
pub fn create_app_config_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();
    let path = version_migrate::Migrator::define("app_config")
        .from::<AppConfigV1_0_0>()
        .into_with_save::<AppConfig>();
    migrator
        .register(path)
        .expect("Failed to register app_config migration path");
    migrator
}
