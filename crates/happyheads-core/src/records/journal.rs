//! Journal entries and the journal repository port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mood::MoodLevel;
use crate::error::{HappyHeadsError, Result};
use crate::filter::Filterable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodLevel>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Filterable for JournalEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    /// Entries are filtered by tag membership.
    fn categories(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.date)
    }
}

/// Content of the journal editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub mood: Option<MoodLevel>,
    pub tags: Vec<String>,
}

impl JournalDraft {
    /// Prefills the editor from an existing entry.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: entry.mood,
            tags: entry.tags.clone(),
        }
    }

    /// Adds a tag unless it is blank or already present.
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// # Errors
    ///
    /// Returns `Validation` when the title or content is blank.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(HappyHeadsError::validation("title", "is required"));
        }
        if self.content.trim().is_empty() {
            return Err(HappyHeadsError::validation("content", "is required"));
        }
        Ok(())
    }

    /// Builds the entry this draft saves as.
    pub fn into_entry(self, id: String, date: DateTime<Utc>) -> JournalEntry {
        JournalEntry {
            id,
            title: self.title,
            content: self.content,
            date,
            mood: self.mood,
            tags: self.tags,
        }
    }
}

/// Unique tags across entries, in first-seen order.
pub fn all_tags(entries: &[JournalEntry]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in entries.iter().flat_map(|entry| entry.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Storage for journal entries, newest first.
#[async_trait]
pub trait JournalRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<JournalEntry>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<JournalEntry>>;

    /// Inserts a new entry at the top, or replaces the entry with the same id
    /// in place.
    async fn upsert(&self, entry: JournalEntry) -> Result<()>;

    /// Removes an entry. Returns whether it existed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
