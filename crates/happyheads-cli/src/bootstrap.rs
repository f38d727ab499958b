//! Composition root: wires configuration, storage and services together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use happyheads_application::SessionStore;
use happyheads_core::config::AppConfig;
use happyheads_core::identity::Route;
use happyheads_core::records::{
    Appointment, ContentItem, ManagedUser, MeditationSession, Post, Therapist,
};
use happyheads_infrastructure::{
    fixtures, ConfigService, HappyHeadsPaths, InMemoryJournalRepository, LocalStorage,
    LocalStorageIdentityRepository, LocalStorageMoodRepository, SimulatedAuthenticator,
    StaticRecordSource,
};

pub struct App {
    pub config: AppConfig,
    pub storage: LocalStorage,
    pub session: SessionStore,
    /// Cancelled on Ctrl-C once [`App::watch_interrupts`] is running.
    pub interrupt: CancellationToken,
}

/// Loads configuration from `config_path` or the platform default.
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let service = match config_path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config path")?,
    };
    service
        .get_config()
        .with_context(|| format!("Failed to load {}", service.path().display()))
}

impl App {
    /// Opens local storage and restores the stored session.
    pub async fn start(config: AppConfig) -> Result<Self> {
        let root = HappyHeadsPaths::local_storage_dir(&config)?;
        let storage = LocalStorage::new(root);
        tracing::debug!(root = %storage.root().display(), "Opened local storage");

        let identities = LocalStorageIdentityRepository::new(storage.clone(), config.identity_key());
        let authenticator = SimulatedAuthenticator::from_millis(config.sign_in_delay_ms);
        let session = SessionStore::new(Arc::new(identities), Arc::new(authenticator));
        session.restore().await;

        Ok(Self {
            config,
            storage,
            session,
            interrupt: CancellationToken::new(),
        })
    }

    /// Spawns the single Ctrl-C listener for this process.
    pub fn watch_interrupts(&self) {
        let trigger = self.interrupt.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });
    }

    /// Fails with `AccessDenied` unless the session may open `route`.
    pub fn open(&self, route: Route) -> Result<()> {
        self.session.require(route).map_err(|e| {
            tracing::debug!(route = %route, error = %e, "Page refused");
            anyhow::Error::new(e)
        })
    }

    pub fn mood_repository(&self) -> LocalStorageMoodRepository {
        LocalStorageMoodRepository::new(self.storage.clone(), self.config.mood_history_key())
    }

    pub fn journal_repository(&self) -> InMemoryJournalRepository {
        InMemoryJournalRepository::with_entries(fixtures::journal_entries(Utc::now()))
    }

    pub fn posts(&self) -> StaticRecordSource<Post> {
        StaticRecordSource::new(fixtures::community_posts(Utc::now()))
    }

    pub fn content(&self) -> StaticRecordSource<ContentItem> {
        StaticRecordSource::new(fixtures::content_items())
    }

    pub fn meditations(&self) -> StaticRecordSource<MeditationSession> {
        StaticRecordSource::new(fixtures::meditation_sessions())
    }

    pub fn therapists(&self) -> StaticRecordSource<Therapist> {
        StaticRecordSource::new(fixtures::therapists())
    }

    pub fn appointments(&self) -> StaticRecordSource<Appointment> {
        StaticRecordSource::new(fixtures::appointments(Utc::now().date_naive()))
    }

    pub fn managed_users(&self) -> StaticRecordSource<ManagedUser> {
        StaticRecordSource::new(fixtures::managed_users())
    }
}
