//! User roster shown on the admin dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub status: UserStatus,
    /// Human label such as "2 hours ago"
    pub last_active: String,
}

impl Filterable for ManagedUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn categories(&self) -> Vec<&str> {
        vec![match self.status {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }]
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl RosterSummary {
    pub fn of(users: &[ManagedUser]) -> Self {
        let active = users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .count();
        Self {
            total: users.len(),
            active,
            inactive: users.len() - active,
        }
    }
}
