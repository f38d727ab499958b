//! Page controllers.
//!
//! Each page pairs a record snapshot or repository with the state of its
//! filters and exposes the actions its screen offers.

pub mod admin;
pub mod community;
pub mod journal;
pub mod library;
pub mod mindfulness;
pub mod mood_tracker;
pub mod therapist_booking;

pub use admin::AdminPage;
pub use community::CommunityPage;
pub use journal::JournalPage;
pub use library::LibraryPage;
pub use mindfulness::MindfulnessPage;
pub use mood_tracker::MoodTrackerPage;
pub use therapist_booking::TherapistBookingPage;
