//! Pure derivation of a displayed list from a source collection and criteria.

use std::cmp::Reverse;

use super::criteria::{FilterCriteria, Selector, SortKey, ALL};
use super::record::Filterable;

/// Returns whether `record` satisfies every active criterion.
pub fn matches<R: Filterable>(record: &R, criteria: &FilterCriteria) -> bool {
    matches_search(record, &criteria.search)
        && matches_category(record, &criteria.category)
        && matches_kind(record, &criteria.kind)
}

fn matches_search<R: Filterable>(record: &R, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_category<R: Filterable>(record: &R, selector: &Selector) -> bool {
    match selector {
        Selector::All => true,
        Selector::Only(category) => record.categories().iter().any(|c| *c == category.as_str()),
    }
}

fn matches_kind<R: Filterable>(record: &R, selector: &Selector) -> bool {
    match selector {
        Selector::All => true,
        Selector::Only(kind) => record.kind() == Some(kind.as_str()),
    }
}

/// Filters and orders `source` according to `criteria`.
///
/// Deterministic for fixed inputs. Sorting is stable, so records with equal
/// keys keep their source order. Records without a timestamp sort after
/// those with one under `MostRecent`.
pub fn project<R: Filterable + Clone>(source: &[R], criteria: &FilterCriteria) -> Vec<R> {
    let mut visible: Vec<R> = source
        .iter()
        .filter(|record| matches(*record, criteria))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::SourceOrder => {}
        SortKey::MostRecent => visible.sort_by_key(|record| Reverse(record.timestamp())),
        SortKey::MostPopular => visible.sort_by_key(|record| Reverse(record.popularity())),
    }

    tracing::debug!(
        source = source.len(),
        visible = visible.len(),
        sort = %criteria.sort,
        "Projected records"
    );

    visible
}

/// Counts records per category value.
///
/// The `"all"` entry counts the whole source; any other value counts records
/// whose categories contain it. Output follows the order of `categories`.
pub fn category_counts<R: Filterable>(source: &[R], categories: &[&str]) -> Vec<(String, usize)> {
    categories
        .iter()
        .map(|category| {
            let count = if *category == ALL {
                source.len()
            } else {
                source
                    .iter()
                    .filter(|record| record.categories().contains(category))
                    .count()
            };
            (category.to_string(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        title: &'static str,
        body: &'static str,
        category: &'static str,
        kind: Option<&'static str>,
        at: Option<DateTime<Utc>>,
        score: u64,
    }

    impl Filterable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.body]
        }

        fn categories(&self) -> Vec<&str> {
            vec![self.category]
        }

        fn kind(&self) -> Option<&str> {
            self.kind
        }

        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.at
        }

        fn popularity(&self) -> u64 {
            self.score
        }
    }

    fn at(hour: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(2024, 1, 10, hour, 0, 0).single()
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                title: "Morning Anxiety",
                body: "breathing helps",
                category: "anxiety",
                kind: Some("article"),
                at: at(9),
                score: 32,
            },
            Item {
                title: "Meditation results",
                body: "thirty days",
                category: "mindfulness",
                kind: Some("video"),
                at: at(6),
                score: 57,
            },
            Item {
                title: "Work stress",
                body: "need SUPPORT",
                category: "support",
                kind: None,
                at: None,
                score: 30,
            },
            Item {
                title: "Weekly check-in",
                body: "how is everyone",
                category: "general",
                kind: Some("article"),
                at: at(1),
                score: 58,
            },
        ]
    }

    #[test]
    fn test_empty_criteria_returns_source_order() {
        let source = items();
        assert_eq!(project(&source, &FilterCriteria::new()), source);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let criteria = FilterCriteria::new().with_category(Selector::only("anxiety"));
        let visible = project(&items(), &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Morning Anxiety");

        let criteria = FilterCriteria::new().with_category(Selector::only("Anxiety"));
        assert!(project(&items(), &criteria).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let criteria = FilterCriteria::new().with_search("support");
        let visible = project(&items(), &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Work stress");

        let criteria = FilterCriteria::new().with_search("MEDITATION");
        assert_eq!(project(&items(), &criteria).len(), 1);
    }

    #[test]
    fn test_criteria_combine_by_conjunction() {
        let criteria = FilterCriteria::new()
            .with_search("e")
            .with_kind(Selector::only("article"));
        let titles: Vec<_> = project(&items(), &criteria)
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["Morning Anxiety", "Weekly check-in"]);
    }

    #[test]
    fn test_kind_filter_excludes_untyped_records() {
        let criteria = FilterCriteria::new().with_kind(Selector::only("video"));
        let visible = project(&items(), &criteria);
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|item| item.kind == Some("video")));
    }

    #[test]
    fn test_all_category_equals_no_category_filter() {
        let with_all = FilterCriteria::new()
            .with_search("e")
            .with_category(Selector::parse("all"));
        let without = FilterCriteria::new().with_search("e");
        assert_eq!(project(&items(), &with_all), project(&items(), &without));
    }

    #[test]
    fn test_most_popular_orders_by_score_descending() {
        let criteria = FilterCriteria::new().with_sort(SortKey::MostPopular);
        let scores: Vec<_> = project(&items(), &criteria)
            .into_iter()
            .map(|item| item.score)
            .collect();
        assert_eq!(scores, vec![58, 57, 32, 30]);
    }

    #[test]
    fn test_most_recent_puts_undated_last() {
        let criteria = FilterCriteria::new().with_sort(SortKey::MostRecent);
        let titles: Vec<_> = project(&items(), &criteria)
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Morning Anxiety",
                "Meditation results",
                "Weekly check-in",
                "Work stress"
            ]
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let criteria = FilterCriteria::new()
            .with_search("e")
            .with_sort(SortKey::MostPopular);
        let once = project(&items(), &criteria);
        let twice = project(&once, &criteria);
        assert_eq!(once, twice);
        assert_eq!(once, project(&items(), &criteria));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let criteria = FilterCriteria::new().with_search("nothing matches this");
        assert!(project(&items(), &criteria).is_empty());
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&items(), &["all", "anxiety", "depression"]);
        assert_eq!(
            counts,
            vec![
                ("all".to_string(), 4),
                ("anxiety".to_string(), 1),
                ("depression".to_string(), 0)
            ]
        );
    }
}
