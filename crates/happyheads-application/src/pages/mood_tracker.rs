//! Mood tracker page.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use happyheads_core::records::{MoodEntry, MoodLevel, MoodPeriod, MoodRepository, MoodSummary};
use happyheads_core::Result;

pub struct MoodTrackerPage {
    repository: Arc<dyn MoodRepository>,
}

impl MoodTrackerPage {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    /// Records today's mood with an optional note.
    pub async fn log(&self, level: MoodLevel, note: impl Into<String>) -> Result<MoodEntry> {
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            level,
            note: note.into().trim().to_string(),
            recorded_at: Utc::now(),
        };
        self.repository.append(entry.clone()).await?;
        tracing::info!(entry_id = %entry.id, level = level.value(), "Logged mood");
        Ok(entry)
    }

    pub async fn history(&self) -> Result<Vec<MoodEntry>> {
        self.repository.history().await
    }

    pub async fn summary(&self, period: MoodPeriod) -> Result<MoodSummary> {
        self.summary_at(period, Utc::now()).await
    }

    /// Summary of the window ending at `now`.
    pub async fn summary_at(&self, period: MoodPeriod, now: DateTime<Utc>) -> Result<MoodSummary> {
        let history = self.repository.history().await?;
        Ok(MoodSummary::compute(&history, period, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use happyheads_core::records::MoodTrend;
    use happyheads_infrastructure::{LocalStorage, LocalStorageMoodRepository};
    use tempfile::TempDir;

    fn open_page(dir: &TempDir) -> MoodTrackerPage {
        let storage = LocalStorage::new(dir.path().to_path_buf());
        MoodTrackerPage::new(Arc::new(LocalStorageMoodRepository::new(
            storage,
            "happyheads_mood_history",
        )))
    }

    #[tokio::test]
    async fn test_empty_history_has_no_average() {
        let dir = TempDir::new().unwrap();
        let summary = open_page(&dir).summary(MoodPeriod::Week).await.unwrap();
        assert_eq!(summary.entries, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.trend, None);
    }

    #[tokio::test]
    async fn test_logged_moods_persist_and_summarize() {
        let dir = TempDir::new().unwrap();
        let page = open_page(&dir);
        page.log(MoodLevel::NotGreat, "  rough start ").await.unwrap();
        page.log(MoodLevel::Good, "").await.unwrap();

        let history = page.history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].note, "rough start");

        let summary = page
            .summary_at(MoodPeriod::Month, Utc::now() + Duration::seconds(1))
            .await
            .unwrap();
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.average, Some(3.0));
        assert_eq!(summary.trend, Some(MoodTrend::Up));

        let reopened = open_page(&dir);
        assert_eq!(reopened.history().await.unwrap(), history);
    }
}
