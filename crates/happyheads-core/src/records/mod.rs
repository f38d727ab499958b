//! Domain records shown on each page.

pub mod admin;
pub mod community;
pub mod journal;
pub mod library;
pub mod mindfulness;
pub mod mood;
pub mod therapy;

pub use admin::{ManagedUser, RosterSummary, UserStatus};
pub use community::{Post, PostAuthor, PostDraft, POST_CATEGORIES};
pub use journal::{all_tags, JournalDraft, JournalEntry, JournalRepository};
pub use library::{ContentItem, ContentType, CONTENT_CATEGORIES};
pub use mindfulness::{format_time, MeditationCategory, MeditationSession, Playback};
pub use mood::{MoodEntry, MoodLevel, MoodPeriod, MoodRepository, MoodSummary, MoodTrend};
pub use therapy::{
    start_of_week, week_days, weekday_name, Appointment, AppointmentStatus, BookingRequest,
    SessionType, Therapist, SPECIALTY_FILTERS,
};
