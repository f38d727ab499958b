//! Identity domain module.
//!
//! # Module Structure
//!
//! - `model`: Identity, role and validated credential inputs
//! - `session`: session state machine and route access rules
//! - `repository`: durable identity storage port
//! - `authenticator`: credential verification port

mod authenticator;
mod model;
mod repository;
mod session;

pub use authenticator::Authenticator;
pub use model::{Credentials, Identity, Registration, Role};
pub use repository::IdentityRepository;
pub use session::{AccessDecision, AccessRequirement, Route, SessionState};
