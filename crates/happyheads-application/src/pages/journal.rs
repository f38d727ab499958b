//! Journal page.
//!
//! Unlike the read-only pages, the journal edits its records, so it works
//! against a [`JournalRepository`] and re-reads it on every projection.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use happyheads_core::filter::{project, FilterCriteria, Selector, SortKey};
use happyheads_core::records::{all_tags, JournalDraft, JournalEntry, JournalRepository};
use happyheads_core::{HappyHeadsError, Result};

pub struct JournalPage {
    repository: Arc<dyn JournalRepository>,
    criteria: FilterCriteria,
}

impl JournalPage {
    pub fn new(repository: Arc<dyn JournalRepository>) -> Self {
        Self {
            repository,
            // The repository keeps entries newest first and edits in place.
            criteria: FilterCriteria::new().with_sort(SortKey::SourceOrder),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    /// Restricts the list to entries carrying `tag`.
    pub fn set_tag(&mut self, tag: Selector) {
        self.criteria.category = tag;
    }

    pub async fn visible(&self) -> Result<Vec<JournalEntry>> {
        let entries = self.repository.list().await?;
        Ok(project(&entries, &self.criteria))
    }

    /// Tags offered by the tag filter.
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        Ok(all_tags(&self.repository.list().await?))
    }

    pub async fn entry(&self, id: &str) -> Result<JournalEntry> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| HappyHeadsError::not_found("journal entry", id))
    }

    /// Saves `draft` as a new entry, or over the entry `editing`.
    pub async fn save(&self, draft: JournalDraft, editing: Option<&str>) -> Result<JournalEntry> {
        self.save_at(draft, editing, Utc::now()).await
    }

    /// [`JournalPage::save`] with an explicit clock.
    pub async fn save_at(
        &self,
        draft: JournalDraft,
        editing: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry> {
        draft.validate()?;

        let id = match editing {
            Some(id) => self.entry(id).await?.id,
            None => now.timestamp_millis().to_string(),
        };
        let entry = draft.into_entry(id, now);
        self.repository.upsert(entry.clone()).await?;

        tracing::info!(
            entry_id = %entry.id,
            edited = editing.is_some(),
            "Saved journal entry"
        );
        Ok(entry)
    }

    /// # Errors
    ///
    /// Returns `NotFound` when no entry has `id`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(HappyHeadsError::not_found("journal entry", id));
        }
        tracing::info!(entry_id = %id, "Deleted journal entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use happyheads_core::records::MoodLevel;
    use happyheads_infrastructure::{fixtures, InMemoryJournalRepository};

    fn page() -> (JournalPage, DateTime<Utc>) {
        let now = Utc::now();
        let repo = InMemoryJournalRepository::with_entries(fixtures::journal_entries(now));
        (JournalPage::new(Arc::new(repo)), now)
    }

    fn draft(title: &str) -> JournalDraft {
        JournalDraft {
            title: title.to_string(),
            content: "Slept well".to_string(),
            mood: Some(MoodLevel::Good),
            tags: vec!["sleep".to_string()],
        }
    }

    #[tokio::test]
    async fn test_tag_filter_and_search() {
        let (mut page, _) = page();
        page.set_tag(Selector::only("stress"));
        let visible = page.visible().await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");

        page.set_tag(Selector::All);
        page.set_search("FAMILY");
        let visible = page.visible().await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[tokio::test]
    async fn test_new_entry_is_listed_first() {
        let (page, now) = page();
        let saved = page
            .save_at(draft("Rested"), None, now + Duration::minutes(1))
            .await
            .unwrap();
        let visible = page.visible().await.unwrap();
        assert_eq!(visible.len(), 4);
        assert_eq!(visible[0].id, saved.id);
        assert!(page.all_tags().await.unwrap().contains(&"sleep".to_string()));
    }

    fn ids(entries: &[JournalEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_edit_keeps_id_and_position() {
        let (page, now) = page();
        let edited = page
            .save_at(draft("Calmer Day"), Some("3"), now + Duration::minutes(1))
            .await
            .unwrap();
        assert_eq!(edited.id, "3");

        let visible = page.visible().await.unwrap();
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
        assert_eq!(visible[2].title, "Calmer Day");

        let err = page.save(draft("Ghost"), Some("42")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_draft_and_delete() {
        let (page, _) = page();
        let err = page.save(JournalDraft::default(), None).await.unwrap_err();
        assert!(err.is_validation());

        page.delete("2").await.unwrap();
        assert_eq!(page.visible().await.unwrap().len(), 2);
        assert!(page.delete("2").await.unwrap_err().is_not_found());
    }
}
