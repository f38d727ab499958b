//! Therapists, appointments and booking rules.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{HappyHeadsError, Result};
use crate::filter::Filterable;

/// Specialties offered in the filter dropdown.
pub const SPECIALTY_FILTERS: [&str; 7] = [
    "all",
    "Anxiety",
    "Depression",
    "Trauma",
    "Relationships",
    "CBT",
    "Mindfulness",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SessionType {
    Video,
    Phone,
    InPerson,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub avatar: String,
    pub bio: String,
    /// Years of practice
    pub experience: u32,
    pub session_types: Vec<SessionType>,
    pub hourly_rate: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Weekday name ("Monday") to offered time slots ("9:00 AM")
    #[serde(default)]
    pub availability: BTreeMap<String, Vec<String>>,
}

impl Therapist {
    pub fn offers(&self, session_type: SessionType) -> bool {
        self.session_types.contains(&session_type)
    }

    /// Time slots offered on the weekday of `date`.
    pub fn slots_on(&self, date: NaiveDate) -> &[String] {
        self.availability
            .get(weekday_name(date.weekday()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Filterable for Therapist {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.specialties.iter().map(String::as_str));
        fields
    }

    fn categories(&self) -> Vec<&str> {
        self.specialties.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub therapist_id: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub therapist_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub session_type: SessionType,
}

impl BookingRequest {
    /// Checks the request against the therapist's offer and existing
    /// appointments.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the therapist does not match, the session
    /// type is not offered, the slot is not available that weekday, or an
    /// upcoming appointment already holds the slot.
    pub fn validate(&self, therapist: &Therapist, existing: &[Appointment]) -> Result<()> {
        if therapist.id != self.therapist_id {
            return Err(HappyHeadsError::validation(
                "therapist",
                format!("request is for '{}'", self.therapist_id),
            ));
        }
        if self.time.trim().is_empty() {
            return Err(HappyHeadsError::validation("time", "is required"));
        }
        if !therapist.offers(self.session_type) {
            return Err(HappyHeadsError::validation(
                "session_type",
                format!("{} does not offer {} sessions", therapist.name, self.session_type),
            ));
        }
        if !therapist.slots_on(self.date).contains(&self.time) {
            return Err(HappyHeadsError::validation(
                "time",
                format!(
                    "{} is not available on {}",
                    self.time,
                    weekday_name(self.date.weekday())
                ),
            ));
        }
        let taken = existing.iter().any(|appointment| {
            appointment.status == AppointmentStatus::Upcoming
                && appointment.therapist_id == self.therapist_id
                && appointment.date == self.date
                && appointment.time == self.time
        });
        if taken {
            return Err(HappyHeadsError::validation(
                "time",
                format!("{} on {} is already booked", self.time, self.date),
            ));
        }
        Ok(())
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Seven consecutive dates starting at `start`.
pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}
