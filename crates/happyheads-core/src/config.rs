use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMESPACE: &str = "happyheads";
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application settings read from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for local storage keys (`{namespace}_user`)
    pub storage_namespace: String,
    /// Overrides the platform data directory for local storage
    pub storage_dir: Option<PathBuf>,
    /// Artificial latency of the simulated authenticator
    pub sign_in_delay_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_NAMESPACE.to_string(),
            storage_dir: None,
            sign_in_delay_ms: DEFAULT_SIGN_IN_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn identity_key(&self) -> String {
        format!("{}_user", self.storage_namespace)
    }

    pub fn mood_history_key(&self) -> String {
        format!("{}_mood_history", self.storage_namespace)
    }
}
