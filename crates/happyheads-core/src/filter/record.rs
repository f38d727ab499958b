//! Record capabilities consumed by the projection, and the data source port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

/// A record that can be searched, categorized and ordered.
///
/// Only `search_fields` and `categories` are mandatory; the rest default to
/// "not applicable", which makes the corresponding criterion exclude the
/// record (`kind`) or leave it in source order (`timestamp`, `popularity`).
pub trait Filterable {
    /// Text fields searched case-insensitively (title, content, tags, ...).
    fn search_fields(&self) -> Vec<&str>;

    /// Values matched exactly by the category selector.
    ///
    /// Single-category records return one value; tag- or specialty-based
    /// records return all of them.
    fn categories(&self) -> Vec<&str>;

    /// Value matched exactly by the type selector.
    fn kind(&self) -> Option<&str> {
        None
    }

    /// Timestamp used by the most-recent ordering.
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Engagement score used by the most-popular ordering.
    fn popularity(&self) -> u64 {
        0
    }
}

/// Read-only provider of a page's source collection.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<R>>;
}
