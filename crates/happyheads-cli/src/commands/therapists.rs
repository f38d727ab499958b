use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use happyheads_application::TherapistBookingPage;
use happyheads_core::filter::Selector;
use happyheads_core::identity::Route;
use happyheads_core::records::{weekday_name, BookingRequest, SessionType};

use crate::bootstrap::App;

async fn page(app: &App) -> Result<TherapistBookingPage> {
    Ok(TherapistBookingPage::load(&app.therapists(), &app.appointments()).await?)
}

pub async fn list(app: &App, search: String, specialty: Option<String>) -> Result<()> {
    app.open(Route::Therapist)?;

    let mut page = page(app).await?;
    page.set_search(search);
    page.set_specialty(Selector::from(specialty));

    for therapist in page.visible() {
        println!();
        println!("{:>2}. {}, {}", therapist.id, therapist.name, therapist.title);
        println!(
            "    ★ {:.1} ({} reviews) · ${}/hour · {} years",
            therapist.rating, therapist.review_count, therapist.hourly_rate, therapist.experience
        );
        println!("    {}", therapist.specialties.join(", "));
        let sessions: Vec<String> = therapist
            .session_types
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("    sessions: {}", sessions.join(", "));
    }

    let upcoming = page.upcoming();
    if !upcoming.is_empty() {
        println!();
        println!("Upcoming appointments:");
        for appointment in upcoming {
            let name = page
                .therapist(&appointment.therapist_id)
                .map(|therapist| therapist.name.as_str())
                .unwrap_or("unknown therapist");
            println!(
                "  {} {} at {} ({})",
                weekday_name(appointment.date.weekday()),
                appointment.date,
                appointment.time,
                name
            );
        }
    }
    Ok(())
}

pub async fn book(
    app: &App,
    therapist_id: String,
    date: &str,
    time: String,
    session_type: &str,
) -> Result<()> {
    app.open(Route::Therapist)?;

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
    let session_type = SessionType::from_str(session_type)
        .with_context(|| format!("Unknown session type '{}'", session_type))?;

    let mut page = page(app).await?;
    let appointment = page.book(BookingRequest {
        therapist_id,
        date,
        time,
        session_type,
    })?;
    let therapist = page.therapist(&appointment.therapist_id)?;
    println!(
        "✅ Booked {} session with {} on {} at {}",
        appointment.session_type, therapist.name, appointment.date, appointment.time
    );
    Ok(())
}
