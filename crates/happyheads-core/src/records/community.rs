//! Community forum posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HappyHeadsError, Result};
use crate::filter::Filterable;

/// Forum categories shown in the sidebar, in display order.
pub const POST_CATEGORIES: [&str; 6] = [
    "all",
    "general",
    "anxiety",
    "depression",
    "mindfulness",
    "support",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: PostAuthor,
    pub title: String,
    pub content: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Likes plus comments.
    pub fn engagement(&self) -> u64 {
        u64::from(self.likes) + u64::from(self.comments)
    }
}

impl Filterable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn categories(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }

    fn popularity(&self) -> u64 {
        self.engagement()
    }
}

/// Content of the "new post" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: "general".to_string(),
        }
    }
}

impl PostDraft {
    /// # Errors
    ///
    /// Returns `Validation` when the title or content is blank, or the
    /// category is not one of the forum categories.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(HappyHeadsError::validation("title", "is required"));
        }
        if self.content.trim().is_empty() {
            return Err(HappyHeadsError::validation("content", "is required"));
        }
        if self.category == "all" || !POST_CATEGORIES.contains(&self.category.as_str()) {
            return Err(HappyHeadsError::validation(
                "category",
                format!("unknown category '{}'", self.category),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation() {
        let mut draft = PostDraft::default();
        assert!(draft.validate().unwrap_err().is_validation());

        draft.title = "Hello".to_string();
        draft.content = "   ".to_string();
        assert!(draft.validate().is_err());

        draft.content = "First post".to_string();
        assert!(draft.validate().is_ok());

        draft.category = "all".to_string();
        assert!(draft.validate().is_err());
    }
}
