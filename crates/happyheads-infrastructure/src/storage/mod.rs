//! File-backed storage primitives.

pub mod atomic_file;
pub mod atomic_toml;
pub mod local_storage;

pub use atomic_file::{write_atomic, FileLock};
pub use atomic_toml::AtomicTomlFile;
pub use local_storage::LocalStorage;
