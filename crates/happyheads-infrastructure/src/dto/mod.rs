//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs are the versioned on-disk schema. Domain types never touch
//! storage directly; repositories go through the migrators defined here.
//!
//! ### Identity Version History
//! - **1.0.0**: `{id, email, name, avatar?, role}`. Blobs written without a
//!   `version` field are read as 1.0.0.
//!
//! ### MoodEntry Version History
//! - **1.0.0**: `{id, level, note, recordedAt}`
//!
//! ### AppConfig Version History
//! - **1.0.0**: `storage_namespace`, `storage_dir`, `sign_in_delay_ms`, `log_level`

mod app_config;
mod identity;
mod mood_entry;

pub use app_config::{AppConfigV1_0_0, create_app_config_migrator};
pub use identity::{IdentityV1_0_0, create_identity_migrator};
pub use mood_entry::{MoodEntryV1_0_0, create_mood_entry_migrator};
