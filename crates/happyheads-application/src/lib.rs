//! Application layer for HappyHeads.
//!
//! Orchestrates the domain and storage crates: the session store owns
//! authentication state, and the page controllers hold per-screen filters
//! and actions.

pub mod filtered_view;
pub mod pages;
pub mod session_store;

pub use filtered_view::FilteredView;
pub use pages::{
    AdminPage, CommunityPage, JournalPage, LibraryPage, MindfulnessPage, MoodTrackerPage,
    TherapistBookingPage,
};
pub use session_store::SessionStore;
