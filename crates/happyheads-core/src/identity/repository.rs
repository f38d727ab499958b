//! Identity persistence port.

use async_trait::async_trait;

use super::model::Identity;
use crate::error::Result;

/// Durable storage for the single signed-in identity of this device.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Loads the stored identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(identity))` when a well-formed identity is stored
    /// - `Ok(None)` when nothing is stored
    /// - `Err(StorageCorrupt)` when something is stored but cannot be read
    async fn load(&self) -> Result<Option<Identity>>;

    /// Replaces the stored identity.
    async fn save(&self, identity: &Identity) -> Result<()>;

    /// Removes the stored identity. Removing an absent identity succeeds.
    async fn clear(&self) -> Result<()>;
}
