pub mod config;
pub mod error;
pub mod filter;
pub mod identity;
pub mod records;

// Re-export common error type
pub use error::{HappyHeadsError, Result};
