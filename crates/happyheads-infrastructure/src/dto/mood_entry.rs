//! MoodEntry DTOs and migrations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use happyheads_core::records::{MoodEntry, MoodLevel};

/// Mood entry V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct MoodEntryV1_0_0 {
    pub id: String,
    pub level: MoodLevel,
    #[serde(default)]
    pub note: String,
    pub recorded_at: DateTime<Utc>,
}

impl IntoDomain<MoodEntry> for MoodEntryV1_0_0 {
    fn into_domain(self) -> MoodEntry {
        MoodEntry {
            id: self.id,
            level: self.level,
            note: self.note,
            recorded_at: self.recorded_at,
        }
    }
}

impl FromDomain<MoodEntry> for MoodEntryV1_0_0 {
    fn from_domain(entry: MoodEntry) -> Self {
        MoodEntryV1_0_0 {
            id: entry.id,
            level: entry.level,
            note: entry.note,
            recorded_at: entry.recorded_at,
        }
    }
}

/// Creates a Migrator for MoodEntry entities.
pub fn create_mood_entry_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();
    let path = version_migrate::Migrator::define("mood_entry")
        .from::<MoodEntryV1_0_0>()
        .into_with_save::<MoodEntry>();
    migrator
        .register(path)
        .expect("Failed to register mood_entry migration path");
    migrator
}
