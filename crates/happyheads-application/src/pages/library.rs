//! Content library page.

use happyheads_core::filter::{FilterCriteria, RecordSource, Selector};
use happyheads_core::records::{ContentItem, CONTENT_CATEGORIES};
use happyheads_core::{HappyHeadsError, Result};

use crate::filtered_view::FilteredView;

pub struct LibraryPage {
    view: FilteredView<ContentItem>,
}

impl LibraryPage {
    pub async fn load(source: &dyn RecordSource<ContentItem>) -> Result<Self> {
        Ok(Self {
            view: FilteredView::load(source, FilterCriteria::default()).await?,
        })
    }

    pub fn view(&self) -> &FilteredView<ContentItem> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FilteredView<ContentItem> {
        &mut self.view
    }

    pub fn visible(&self) -> Vec<ContentItem> {
        self.view.visible()
    }

    pub fn counts(&self) -> Vec<(String, usize)> {
        self.view.counts(&CONTENT_CATEGORIES)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    pub fn set_category(&mut self, category: Selector) {
        self.view.set_category(category);
    }

    pub fn set_kind(&mut self, kind: Selector) {
        self.view.set_kind(kind);
    }

    /// Flips the favorite flag. Returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let item = self
            .view
            .source_mut()
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| HappyHeadsError::not_found("content item", id))?;
        item.is_favorite = !item.is_favorite;
        Ok(item.is_favorite)
    }

    pub fn favorites(&self) -> Vec<ContentItem> {
        self.view
            .source()
            .iter()
            .filter(|item| item.is_favorite)
            .cloned()
            .collect()
    }
}
