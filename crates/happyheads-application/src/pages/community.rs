//! Community forum page.

use chrono::Utc;

use happyheads_core::filter::{FilterCriteria, RecordSource, Selector, SortKey};
use happyheads_core::identity::Identity;
use happyheads_core::records::{Post, PostAuthor, PostDraft, POST_CATEGORIES};
use happyheads_core::{HappyHeadsError, Result};

use crate::filtered_view::FilteredView;

pub struct CommunityPage {
    view: FilteredView<Post>,
}

impl CommunityPage {
    /// Newest posts first until the sort is changed.
    pub fn default_criteria() -> FilterCriteria {
        FilterCriteria::new().with_sort(SortKey::MostRecent)
    }

    pub async fn load(source: &dyn RecordSource<Post>) -> Result<Self> {
        Ok(Self {
            view: FilteredView::load(source, Self::default_criteria()).await?,
        })
    }

    pub fn view(&self) -> &FilteredView<Post> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FilteredView<Post> {
        &mut self.view
    }

    pub fn visible(&self) -> Vec<Post> {
        self.view.visible()
    }

    /// Sidebar counts for every forum category.
    pub fn counts(&self) -> Vec<(String, usize)> {
        self.view.counts(&POST_CATEGORIES)
    }

    pub fn set_category(&mut self, category: Selector) {
        self.view.set_category(category);
    }

    /// Publishes a post by `author` at the top of the feed.
    pub fn create_post(&mut self, draft: PostDraft, author: &Identity) -> Result<Post> {
        draft.validate()?;
        let now = Utc::now();
        let post = Post {
            id: now.timestamp_millis().to_string(),
            author: PostAuthor {
                name: author.name.clone(),
                avatar: author.avatar.clone(),
                is_verified: false,
            },
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            category: draft.category,
            timestamp: now,
            likes: 0,
            comments: 0,
            is_liked: false,
            tags: Vec::new(),
        };
        self.view.source_mut().insert(0, post.clone());
        tracing::info!(post_id = %post.id, category = %post.category, "Created post");
        Ok(post)
    }

    /// Likes or unlikes a post. Returns the new liked flag.
    pub fn toggle_like(&mut self, id: &str) -> Result<bool> {
        let post = self
            .view
            .source_mut()
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| HappyHeadsError::not_found("post", id))?;

        post.is_liked = !post.is_liked;
        if post.is_liked {
            post.likes += 1;
        } else {
            post.likes = post.likes.saturating_sub(1);
        }
        Ok(post.is_liked)
    }
}
