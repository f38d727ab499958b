//! Therapist directory and appointment booking.

use chrono::{NaiveDate, Utc};

use happyheads_core::filter::{FilterCriteria, RecordSource, Selector};
use happyheads_core::records::{
    start_of_week, week_days, Appointment, AppointmentStatus, BookingRequest, Therapist,
    SPECIALTY_FILTERS,
};
use happyheads_core::{HappyHeadsError, Result};

use crate::filtered_view::FilteredView;

pub struct TherapistBookingPage {
    view: FilteredView<Therapist>,
    appointments: Vec<Appointment>,
}

impl TherapistBookingPage {
    pub async fn load(
        therapists: &dyn RecordSource<Therapist>,
        appointments: &dyn RecordSource<Appointment>,
    ) -> Result<Self> {
        Ok(Self {
            view: FilteredView::load(therapists, FilterCriteria::default()).await?,
            appointments: appointments.load_all().await?,
        })
    }

    pub fn visible(&self) -> Vec<Therapist> {
        self.view.visible()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    pub fn set_specialty(&mut self, specialty: Selector) {
        self.view.set_category(specialty);
    }

    pub fn specialty_counts(&self) -> Vec<(String, usize)> {
        self.view.counts(&SPECIALTY_FILTERS)
    }

    pub fn therapist(&self, id: &str) -> Result<&Therapist> {
        self.view
            .source()
            .iter()
            .find(|therapist| therapist.id == id)
            .ok_or_else(|| HappyHeadsError::not_found("therapist", id))
    }

    /// The Sunday-to-Saturday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Vec<NaiveDate> {
        week_days(start_of_week(date))
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn upcoming(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.status == AppointmentStatus::Upcoming)
            .collect()
    }

    /// Books the requested slot as an upcoming appointment.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown therapist and `Validation` when the
    /// slot cannot be booked.
    pub fn book(&mut self, request: BookingRequest) -> Result<Appointment> {
        let therapist = self.therapist(&request.therapist_id)?;
        request.validate(therapist, &self.appointments)?;

        let appointment = Appointment {
            id: Utc::now().timestamp_millis().to_string(),
            therapist_id: request.therapist_id,
            date: request.date,
            time: request.time,
            session_type: request.session_type,
            status: AppointmentStatus::Upcoming,
        };
        tracing::info!(
            therapist_id = %appointment.therapist_id,
            date = %appointment.date,
            time = %appointment.time,
            "Booked appointment"
        );
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }
}
