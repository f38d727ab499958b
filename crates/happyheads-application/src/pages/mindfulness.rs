//! Mindfulness page: session browser plus the playback timer.

use happyheads_core::filter::{FilterCriteria, RecordSource, Selector};
use happyheads_core::records::{format_time, MeditationCategory, MeditationSession, Playback};
use happyheads_core::{HappyHeadsError, Result};

use crate::filtered_view::FilteredView;

pub struct MindfulnessPage {
    view: FilteredView<MeditationSession>,
    playback: Playback,
}

impl MindfulnessPage {
    pub async fn load(source: &dyn RecordSource<MeditationSession>) -> Result<Self> {
        Ok(Self {
            view: FilteredView::load(source, FilterCriteria::default()).await?,
            playback: Playback::new(),
        })
    }

    pub fn visible(&self) -> Vec<MeditationSession> {
        self.view.visible()
    }

    pub fn set_category(&mut self, category: Selector) {
        self.view.set_category(category);
    }

    /// Session counts per category tab, starting with "all".
    pub fn counts(&self) -> Vec<(String, usize)> {
        let mut tabs = vec![happyheads_core::filter::ALL];
        tabs.extend(MeditationCategory::ALL.iter().map(MeditationCategory::as_str));
        self.view.counts(&tabs)
    }

    /// Loads session `id` into the player, stopped at zero.
    pub fn select(&mut self, id: &str) -> Result<&MeditationSession> {
        let session = self
            .view
            .source()
            .iter()
            .find(|session| session.id == id)
            .cloned()
            .ok_or_else(|| HappyHeadsError::not_found("meditation session", id))?;
        tracing::debug!(session_id = %session.id, minutes = session.duration, "Selected session");
        self.playback.select(session);
        self.playback
            .session()
            .ok_or_else(|| HappyHeadsError::internal("playback lost its session"))
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle(&mut self) {
        self.playback.toggle();
    }

    /// Advances the timer by `seconds` one-second ticks.
    pub fn advance(&mut self, seconds: u32) {
        for _ in 0..seconds {
            if !self.playback.is_playing() {
                break;
            }
            self.playback.tick();
        }
    }

    pub fn reset(&mut self) {
        self.playback.reset();
    }

    /// Timer label such as "1:05 / 5:00".
    pub fn clock(&self) -> String {
        let total = self
            .playback
            .session()
            .map(MeditationSession::total_seconds)
            .unwrap_or(0);
        format!("{} / {}", format_time(self.playback.elapsed()), format_time(total))
    }
}
