//! Authenticator that accepts any well-formed credentials.
//!
//! There is no backend: after an artificial delay the identity is synthesized
//! from the email. Callers race the returned future against their own
//! cancellation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use happyheads_core::identity::{Authenticator, Credentials, Identity, Registration, Role};
use happyheads_core::Result;

/// Id every simulated sign-in receives.
pub const SIGN_IN_ID: &str = "1";

#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::from_millis(happyheads_core::config::DEFAULT_SIGN_IN_DELAY_MS)
    }
}

/// Administrator iff the email contains "admin".
fn role_for(email: &str) -> Role {
    if email.contains("admin") {
        Role::Administrator
    } else {
        Role::Standard
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity> {
        self.wait().await;
        let email = credentials.email();
        Ok(Identity {
            id: SIGN_IN_ID.to_string(),
            email: email.to_string(),
            name: Identity::email_local_part(email).to_string(),
            avatar: None,
            role: role_for(email),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<Identity> {
        self.wait().await;
        Ok(Identity {
            id: Utc::now().timestamp_millis().to_string(),
            email: registration.email().to_string(),
            name: registration.name().to_string(),
            avatar: None,
            role: Role::Standard,
        })
    }
}
