//! Identity repository backed by local storage.
//!
//! The identity is stored as versioned flat JSON under `{namespace}_user`.
//! Blobs without a `version` field are the web client's format and are read
//! as version 1.0.0.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use version_migrate::Migrator;

use happyheads_core::identity::{Identity, IdentityRepository};
use happyheads_core::{HappyHeadsError, Result};

use crate::dto::create_identity_migrator;
use crate::storage::LocalStorage;

const LEGACY_VERSION: &str = "1.0.0";

pub struct LocalStorageIdentityRepository {
    storage: LocalStorage,
    key: String,
    migrator: Migrator,
}

impl LocalStorageIdentityRepository {
    pub fn new(storage: LocalStorage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            migrator: create_identity_migrator(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn decode(&self, raw: &str) -> Result<Identity> {
        let mut value: JsonValue = serde_json::from_str(raw)
            .map_err(|e| HappyHeadsError::storage_corrupt(format!("'{}': {}", self.key, e)))?;

        let object = value.as_object_mut().ok_or_else(|| {
            HappyHeadsError::storage_corrupt(format!("'{}' is not a JSON object", self.key))
        })?;
        if !object.contains_key("version") {
            object.insert(
                "version".to_string(),
                JsonValue::String(LEGACY_VERSION.to_string()),
            );
        }

        self.migrator
            .load_flat_from("identity", value)
            .map_err(|e| HappyHeadsError::storage_corrupt(format!("'{}': {}", self.key, e)))
    }
}

#[async_trait]
impl IdentityRepository for LocalStorageIdentityRepository {
    async fn load(&self) -> Result<Option<Identity>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => self.decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, identity: &Identity) -> Result<()> {
        let json = self.migrator.save_domain_flat("identity", identity.clone())?;
        self.storage.set_item(&self.key, &json)
    }

    async fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}
