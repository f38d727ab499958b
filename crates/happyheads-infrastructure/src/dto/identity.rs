//! Identity DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use happyheads_core::identity::{Identity, Role};

/// Identity V1.0.0, the shape the web client stored under `happyheads_user`.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct IdentityV1_0_0 {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl IntoDomain<Identity> for IdentityV1_0_0 {
    fn into_domain(self) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
            name: self.name,
            avatar: self.avatar,
            role: self.role,
        }
    }
}

impl FromDomain<Identity> for IdentityV1_0_0 {
    fn from_domain(identity: Identity) -> Self {
        IdentityV1_0_0 {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            avatar: identity.avatar,
            role: identity.role,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for Identity entities.
pub fn create_identity_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();
    let path = version_migrate::Migrator::define("identity")
        .from::<IdentityV1_0_0>()
        .into_with_save::<Identity>();
    migrator
        .register(path)
        .expect("Failed to register identity migration path");
    migrator
}
