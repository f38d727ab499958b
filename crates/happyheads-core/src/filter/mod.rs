//! Filtered view building blocks.
//!
//! A page keeps a source collection and a [`FilterCriteria`]; [`project`]
//! derives what to display from the two.

pub mod criteria;
pub mod projection;
pub mod record;

pub use criteria::{FilterCriteria, Selector, SortKey, ALL};
pub use projection::{category_counts, matches, project};
pub use record::{Filterable, RecordSource};
