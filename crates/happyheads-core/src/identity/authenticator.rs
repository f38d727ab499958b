//! Authentication port.

use async_trait::async_trait;

use super::model::{Credentials, Identity, Registration};
use crate::error::Result;

/// Turns credentials into an identity.
///
/// Implementations may take arbitrarily long; callers race them against a
/// cancellation token and drop the future when cancelled.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns `InvalidCredentials` when the pair is rejected.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity>;

    /// # Errors
    ///
    /// Returns `Validation` when the account cannot be created.
    async fn register(&self, registration: &Registration) -> Result<Identity>;
}
