//! Filter criteria models.

use std::str::FromStr;
use strum::{Display, EnumString};

/// Sentinel accepted wherever a selector can be written as text.
pub const ALL: &str = "all";

/// Category or type selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Parses user input; empty text and `"all"` both mean no restriction.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<Option<String>> for Selector {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, |v| Self::parse(&v))
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    /// Keep the order of the source collection
    #[default]
    #[strum(to_string = "source", serialize = "none")]
    SourceOrder,
    /// Newest timestamp first
    #[strum(to_string = "recent", serialize = "most-recent")]
    MostRecent,
    /// Highest engagement first
    #[strum(to_string = "popular", serialize = "most-popular")]
    MostPopular,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_str(value.trim()).ok()
    }
}

/// User-adjustable parameters that decide which records a page shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text search; empty means no text restriction
    pub search: String,
    pub category: Selector,
    pub kind: Selector,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Selector) -> Self {
        self.category = category;
        self
    }

    pub fn with_kind(mut self, kind: Selector) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any restriction other than ordering is active.
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all() || !self.kind.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parse_all_sentinel() {
        assert_eq!(Selector::parse("all"), Selector::All);
        assert_eq!(Selector::parse("ALL"), Selector::All);
        assert_eq!(Selector::parse(""), Selector::All);
        assert_eq!(Selector::parse("anxiety"), Selector::only("anxiety"));
    }

    #[test]
    fn test_sort_key_aliases() {
        assert_eq!(SortKey::parse("recent"), Some(SortKey::MostRecent));
        assert_eq!(SortKey::parse("most-popular"), Some(SortKey::MostPopular));
        assert_eq!(SortKey::parse("none"), Some(SortKey::SourceOrder));
        assert_eq!(SortKey::parse("alphabetical"), None);
    }

    #[test]
    fn test_sort_key_display_parses_back() {
        for key in [SortKey::SourceOrder, SortKey::MostRecent, SortKey::MostPopular] {
            assert_eq!(SortKey::parse(&key.to_string()), Some(key));
        }
        assert_eq!(SortKey::MostRecent.to_string(), "recent");
    }

    #[test]
    fn test_default_criteria_do_not_filter() {
        let criteria = FilterCriteria::new();
        assert!(!criteria.is_filtering());
        assert_eq!(criteria.sort, SortKey::SourceOrder);

        let criteria = criteria.with_search("sleep");
        assert!(criteria.is_filtering());
    }
}
