//! Admin dashboard. Only administrators may open it.

use happyheads_core::filter::{FilterCriteria, RecordSource, Selector};
use happyheads_core::identity::{Route, SessionState};
use happyheads_core::records::{ManagedUser, RosterSummary};
use happyheads_core::Result;

use crate::filtered_view::FilteredView;

#[derive(Debug)]
pub struct AdminPage {
    roster: FilteredView<ManagedUser>,
}

impl AdminPage {
    /// Opens the dashboard for `session`.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied` with the redirect target unless `session`
    /// belongs to an administrator. A session that is still loading is
    /// denied as well, since the decision is not known yet.
    pub async fn open(
        session: &SessionState,
        users: &dyn RecordSource<ManagedUser>,
    ) -> Result<Self> {
        if let Err(e) = Route::Admin.require(session) {
            tracing::warn!(error = %e, "Admin dashboard refused");
            return Err(e);
        }

        Ok(Self {
            roster: FilteredView::load(users, FilterCriteria::default()).await?,
        })
    }

    pub fn users(&self) -> Vec<ManagedUser> {
        self.roster.visible()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.roster.set_search(search);
    }

    /// Filters by "active" or "inactive".
    pub fn set_status(&mut self, status: Selector) {
        self.roster.set_category(status);
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary::of(self.roster.source())
    }
}
