//! Filtered View Controller.
//!
//! Holds a page's source snapshot and its current criteria. The displayed
//! list is always recomputed from both, never cached.

use happyheads_core::filter::{
    category_counts, project, FilterCriteria, Filterable, RecordSource, Selector, SortKey,
};
use happyheads_core::Result;

#[derive(Debug, Clone)]
pub struct FilteredView<R> {
    source: Vec<R>,
    criteria: FilterCriteria,
    default_criteria: FilterCriteria,
}

impl<R> FilteredView<R>
where
    R: Filterable + Clone,
{
    pub fn new(source: Vec<R>) -> Self {
        Self::with_criteria(source, FilterCriteria::default())
    }

    /// Starts from `criteria`, which [`FilteredView::reset`] returns to.
    pub fn with_criteria(source: Vec<R>, criteria: FilterCriteria) -> Self {
        Self {
            source,
            default_criteria: criteria.clone(),
            criteria,
        }
    }

    /// Loads the source snapshot from `source`.
    pub async fn load<S>(source: &S, criteria: FilterCriteria) -> Result<Self>
    where
        S: RecordSource<R> + ?Sized,
    {
        let records = source.load_all().await?;
        tracing::debug!(records = records.len(), "Loaded record source");
        Ok(Self::with_criteria(records, criteria))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn set_category(&mut self, category: Selector) {
        self.criteria.category = category;
    }

    pub fn set_kind(&mut self, kind: Selector) {
        self.criteria.kind = kind;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
    }

    pub fn reset(&mut self) {
        self.criteria = self.default_criteria.clone();
    }

    /// The records to display for the current criteria.
    pub fn visible(&self) -> Vec<R> {
        project(&self.source, &self.criteria)
    }

    /// Per-category counts over the whole source.
    pub fn counts(&self, categories: &[&str]) -> Vec<(String, usize)> {
        category_counts(&self.source, categories)
    }

    pub fn source(&self) -> &[R] {
        &self.source
    }

    pub fn replace_source(&mut self, source: Vec<R>) {
        self.source = source;
    }

    /// Mutable access to the snapshot, for pages that edit records in place.
    pub fn source_mut(&mut self) -> &mut Vec<R> {
        &mut self.source
    }
}
