//! In-memory journal repository.
//!
//! Journal entries live for the lifetime of the process, seeded from
//! fixtures or left empty.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use happyheads_core::records::{JournalEntry, JournalRepository};
use happyheads_core::Result;

#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalRepository {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl InMemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `entries`, newest first.
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn list(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JournalEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|entry| entry.id == id).cloned())
    }

    async fn upsert(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => *existing = entry,
            None => entries.insert(0, entry),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        Ok(entries.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: &str, title: &str) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            title: title.to_string(),
            content: "content".to_string(),
            date: Utc::now(),
            mood: None,
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_new_entries_go_to_top_and_edits_stay_in_place() {
        let repo = InMemoryJournalRepository::with_entries(vec![entry("1", "first")]);
        repo.upsert(entry("2", "second")).await.unwrap();
        repo.upsert(entry("1", "first, edited")).await.unwrap();

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["second", "first, edited"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryJournalRepository::with_entries(vec![entry("1", "first")]);
        assert!(repo.delete("1").await.unwrap());
        assert!(!repo.delete("1").await.unwrap());
        assert!(repo.find_by_id("1").await.unwrap().is_none());
    }
}
