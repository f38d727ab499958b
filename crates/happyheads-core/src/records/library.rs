//! Content library items (articles, videos, audio, exercises).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::Filterable;

pub const CONTENT_CATEGORIES: [&str; 7] = [
    "all",
    "anxiety",
    "depression",
    "mindfulness",
    "sleep",
    "self-esteem",
    "relaxation",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContentType {
    Article,
    Video,
    Audio,
    Exercise,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Exercise => "exercise",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub category: String,
    /// Length in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub rating: f32,
    pub author: String,
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub published_date: NaiveDate,
}

impl Filterable for ContentItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn categories(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.published_date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
    }
}
