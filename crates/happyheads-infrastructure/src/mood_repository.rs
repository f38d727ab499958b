//! Mood history backed by local storage.
//!
//! The history is a JSON array of versioned mood entries stored under
//! `{namespace}_mood_history`, in recording order.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use version_migrate::Migrator;

use happyheads_core::records::{MoodEntry, MoodRepository};
use happyheads_core::{HappyHeadsError, Result};

use crate::dto::create_mood_entry_migrator;
use crate::storage::LocalStorage;

pub struct LocalStorageMoodRepository {
    storage: LocalStorage,
    key: String,
    migrator: Migrator,
}

impl LocalStorageMoodRepository {
    pub fn new(storage: LocalStorage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            migrator: create_mood_entry_migrator(),
        }
    }

    fn parse_array(&self, raw: &str) -> Result<Vec<JsonValue>> {
        match serde_json::from_str::<JsonValue>(raw) {
            Ok(JsonValue::Array(items)) => Ok(items),
            Ok(_) => Err(HappyHeadsError::storage_corrupt(format!(
                "'{}' is not a JSON array",
                self.key
            ))),
            Err(e) => Err(HappyHeadsError::storage_corrupt(format!("'{}': {}", self.key, e))),
        }
    }

    fn decode(&self, raw: &str) -> Result<Vec<MoodEntry>> {
        self.parse_array(raw)?
            .into_iter()
            .map(|item| {
                self.migrator
                    .load_flat_from("mood_entry", item)
                    .map_err(|e| HappyHeadsError::storage_corrupt(format!("'{}': {}", self.key, e)))
            })
            .collect()
    }
}

#[async_trait]
impl MoodRepository for LocalStorageMoodRepository {
    async fn history(&self) -> Result<Vec<MoodEntry>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => self.decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn append(&self, entry: MoodEntry) -> Result<()> {
        let saved = self.migrator.save_domain_flat("mood_entry", entry)?;
        let saved: JsonValue = serde_json::from_str(&saved)?;

        self.storage.update_item(&self.key, |current| {
            let mut items = match current {
                Some(raw) => self.parse_array(&raw)?,
                None => Vec::new(),
            };
            items.push(saved);
            Ok(serde_json::to_string(&items)?)
        })?;

        tracing::debug!(key = %self.key, "Appended mood entry");
        Ok(())
    }
}
