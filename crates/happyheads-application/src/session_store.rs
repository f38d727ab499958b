//! Process-wide authentication state.
//!
//! `SessionStore` owns the single active [`Identity`], keeps it in durable
//! storage and broadcasts every state change to subscribers.
//!
//! # Ordering
//!
//! Sign-in and registration persist the identity first and publish
//! `Authenticated` only after the write succeeded. At most one sign-in or
//! registration is in flight: starting another one, or signing out, cancels
//! the previous operation, which then returns `Cancelled` without touching
//! state or storage.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;

use happyheads_core::identity::{
    AccessDecision, Authenticator, Credentials, Identity, IdentityRepository, Registration,
    Route, SessionState,
};
use happyheads_core::{HappyHeadsError, Result};

pub struct SessionStore {
    state: watch::Sender<SessionState>,
    repository: Arc<dyn IdentityRepository>,
    authenticator: Arc<dyn Authenticator>,
    /// Token of the sign-in or registration in flight. Holding this lock
    /// also serializes every commit to state and storage.
    pending: Mutex<Option<CancellationToken>>,
}

impl SessionStore {
    /// Creates a store in the `Loading` state. Call [`SessionStore::restore`]
    /// once at startup.
    pub fn new(
        repository: Arc<dyn IdentityRepository>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            state,
            repository,
            authenticator,
            pending: Mutex::new(None),
        }
    }

    /// Loads the stored identity, if any, and leaves `Loading`.
    ///
    /// Never fails: an unreadable blob is logged, removed, and treated as
    /// no session. Does nothing if another operation already resolved the
    /// state.
    pub async fn restore(&self) -> SessionState {
        let loaded = self.repository.load().await;

        let _guard = self.pending.lock().await;
        if !self.state.borrow().is_loading() {
            return self.current();
        }

        let next = match loaded {
            Ok(Some(identity)) => {
                tracing::info!(user_id = %identity.id, role = %identity.role, "Restored session");
                SessionState::Authenticated(identity)
            }
            Ok(None) => {
                tracing::info!("No stored session");
                SessionState::Unauthenticated
            }
            Err(e) if e.is_storage_corrupt() => {
                tracing::warn!(error = %e, "Discarding corrupt stored session");
                if let Err(clear_err) = self.repository.clear().await {
                    tracing::warn!(error = %clear_err, "Failed to remove corrupt session");
                }
                SessionState::Unauthenticated
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                SessionState::Unauthenticated
            }
        };

        self.publish(next.clone());
        next
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// - `Validation` for a blank password or malformed email
    /// - `Cancelled` when `cancel` fires or a newer operation supersedes this one
    /// - any authenticator or storage error
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        cancel: CancellationToken,
    ) -> Result<Identity> {
        let credentials = Credentials::new(email, password)?;
        let op = self.begin().await;

        let authenticated = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(HappyHeadsError::Cancelled),
            _ = op.cancelled() => Err(HappyHeadsError::Cancelled),
            result = self.authenticator.sign_in(&credentials) => result,
        };

        self.commit(&op, &cancel, authenticated).await
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::sign_in`], plus `Validation` for a blank name.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<Identity> {
        let registration = Registration::new(email, password, name)?;
        let op = self.begin().await;

        let registered = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(HappyHeadsError::Cancelled),
            _ = op.cancelled() => Err(HappyHeadsError::Cancelled),
            result = self.authenticator.register(&registration) => result,
        };

        self.commit(&op, &cancel, registered).await
    }

    /// Cancels any pending operation, forgets the stored identity and
    /// publishes `Unauthenticated`. A storage failure is logged only.
    pub async fn sign_out(&self) {
        let mut pending = self.pending.lock().await;
        if let Some(token) = pending.take() {
            token.cancel();
        }

        if let Err(e) = self.repository.clear().await {
            tracing::warn!(error = %e, "Failed to remove stored session");
        }

        let previous = self.state.send_replace(SessionState::Unauthenticated);
        if let Some(identity) = previous.identity() {
            tracing::info!(user_id = %identity.id, "Signed out");
        }
    }

    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Receiver that yields the latest state after each change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn authorize(&self, route: Route) -> AccessDecision {
        route.authorize(&self.state.borrow())
    }

    /// Gate for opening `route`; see [`Route::require`].
    pub fn require(&self, route: Route) -> Result<()> {
        route.require(&self.state.borrow())
    }

    /// Registers a new in-flight operation, cancelling the previous one.
    async fn begin(&self) -> CancellationToken {
        let op = CancellationToken::new();
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.replace(op.clone()) {
            previous.cancel();
        }
        op
    }

    async fn commit(
        &self,
        op: &CancellationToken,
        cancel: &CancellationToken,
        outcome: Result<Identity>,
    ) -> Result<Identity> {
        let mut pending = self.pending.lock().await;
        if op.is_cancelled() || cancel.is_cancelled() {
            // A superseded op has already been replaced by its successor.
            if !op.is_cancelled() {
                *pending = None;
            }
            return Err(HappyHeadsError::Cancelled);
        }
        *pending = None;

        let identity = outcome?;

        if let Err(e) = self.repository.save(&identity).await {
            tracing::warn!(error = %e, "Failed to persist session");
            if let Err(clear_err) = self.repository.clear().await {
                tracing::warn!(error = %clear_err, "Failed to remove stale session");
            }
            self.publish(SessionState::Unauthenticated);
            return Err(e);
        }

        tracing::info!(user_id = %identity.id, role = %identity.role, "Signed in");
        self.publish(SessionState::Authenticated(identity.clone()));
        Ok(identity)
    }

    fn publish(&self, next: SessionState) {
        self.state.send_replace(next);
    }
}
