pub mod config_service;
pub mod dto;
pub mod fixtures;
pub mod identity_repository;
pub mod journal_repository;
pub mod mood_repository;
pub mod paths;
pub mod simulated_authenticator;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::fixtures::StaticRecordSource;
pub use crate::identity_repository::LocalStorageIdentityRepository;
pub use crate::journal_repository::InMemoryJournalRepository;
pub use crate::mood_repository::LocalStorageMoodRepository;
pub use crate::paths::HappyHeadsPaths;
pub use crate::simulated_authenticator::SimulatedAuthenticator;
pub use crate::storage::LocalStorage;
