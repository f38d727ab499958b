use std::sync::Arc;

use anyhow::{bail, Result};

use happyheads_application::MoodTrackerPage;
use happyheads_core::identity::Route;
use happyheads_core::records::{MoodLevel, MoodPeriod, MoodTrend};

use crate::bootstrap::App;

fn page(app: &App) -> MoodTrackerPage {
    MoodTrackerPage::new(Arc::new(app.mood_repository()))
}

pub async fn log(app: &App, level: u8, note: &str) -> Result<()> {
    app.open(Route::MoodTracker)?;

    let level = MoodLevel::try_from(level)?;
    let entry = page(app).log(level, note).await?;
    println!("{} Logged {} mood", entry.level.emoji(), entry.level.label());
    Ok(())
}

pub async fn summary(app: &App, period: &str) -> Result<()> {
    app.open(Route::MoodTracker)?;

    let period = match period {
        "week" => MoodPeriod::Week,
        "month" => MoodPeriod::Month,
        other => bail!("Unknown period '{}', expected week or month", other),
    };

    let summary = page(app).summary(period).await?;
    println!("Last {} days: {} entries", period.days(), summary.entries);
    match summary.average {
        Some(average) => println!("  average: {:.1}", average),
        None => println!("  average: -"),
    }
    match summary.trend {
        Some(MoodTrend::Up) => println!("  trend:   ↑ improving"),
        Some(MoodTrend::Down) => println!("  trend:   ↓ needs care"),
        None => {}
    }
    Ok(())
}

pub async fn history(app: &App) -> Result<()> {
    app.open(Route::MoodTracker)?;

    for entry in page(app).history().await? {
        let note = if entry.note.is_empty() {
            String::new()
        } else {
            format!(" - {}", entry.note)
        };
        println!(
            "{} {} {}{}",
            entry.recorded_at.format("%Y-%m-%d %H:%M"),
            entry.level.emoji(),
            entry.level.label(),
            note
        );
    }
    Ok(())
}
