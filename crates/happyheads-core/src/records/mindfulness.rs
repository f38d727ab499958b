//! Guided meditation sessions and the playback timer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MeditationCategory {
    Breathing,
    Meditation,
    Sleep,
    Focus,
    Anxiety,
}

impl MeditationCategory {
    pub const ALL: [MeditationCategory; 5] = [
        MeditationCategory::Breathing,
        MeditationCategory::Meditation,
        MeditationCategory::Sleep,
        MeditationCategory::Focus,
        MeditationCategory::Anxiety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeditationCategory::Breathing => "breathing",
            MeditationCategory::Meditation => "meditation",
            MeditationCategory::Sleep => "sleep",
            MeditationCategory::Focus => "focus",
            MeditationCategory::Anxiety => "anxiety",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeditationCategory::Breathing => "Breathing",
            MeditationCategory::Meditation => "Meditation",
            MeditationCategory::Sleep => "Sleep",
            MeditationCategory::Focus => "Focus",
            MeditationCategory::Anxiety => "Anxiety Relief",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeditationSession {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Length in minutes
    pub duration: u32,
    pub category: MeditationCategory,
}

impl MeditationSession {
    pub fn total_seconds(&self) -> u32 {
        self.duration.saturating_mul(60)
    }
}

impl Filterable for MeditationSession {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn categories(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }
}

/// Timer state for the selected session.
///
/// Time only advances through [`Playback::tick`], which the caller drives
/// once per second while playing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playback {
    session: Option<MeditationSession>,
    elapsed: u32,
    playing: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `session`, stopped at zero.
    pub fn select(&mut self, session: MeditationSession) {
        self.session = Some(session);
        self.reset();
    }

    pub fn session(&self) -> Option<&MeditationSession> {
        self.session.as_ref()
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| self.elapsed >= session.total_seconds())
    }

    /// Starts playing. No effect without a session or once finished.
    pub fn play(&mut self) {
        if self.session.is_some() && !self.is_finished() {
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advances one second while playing; stops at the session length.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.elapsed += 1;
        if self.is_finished() {
            self.playing = false;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.playing = false;
    }

    /// Percentage of the session elapsed, 0 without a session.
    pub fn progress(&self) -> f64 {
        match &self.session {
            Some(session) if session.total_seconds() > 0 => {
                f64::from(self.elapsed) / f64::from(session.total_seconds()) * 100.0
            }
            _ => 0.0,
        }
    }
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
