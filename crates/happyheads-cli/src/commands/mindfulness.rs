use std::time::Duration;

use anyhow::Result;

use happyheads_application::MindfulnessPage;
use happyheads_core::filter::Selector;
use happyheads_core::identity::Route;

use crate::bootstrap::App;

pub async fn list(app: &App, category: Option<String>) -> Result<()> {
    app.open(Route::Mindfulness)?;

    let mut page = MindfulnessPage::load(&app.meditations()).await?;
    page.set_category(Selector::from(category));

    for (category, count) in page.counts() {
        print!("{}({}) ", category, count);
    }
    println!();
    for session in page.visible() {
        println!(
            "{:>2}. {} · {} min [{}]",
            session.id,
            session.title,
            session.duration,
            session.category.label()
        );
    }
    Ok(())
}

/// Plays session `id` in real time until it ends, `limit` seconds pass, or
/// Ctrl-C.
pub async fn play(app: &App, id: &str, limit: Option<u32>) -> Result<()> {
    app.open(Route::Mindfulness)?;

    let mut page = MindfulnessPage::load(&app.meditations()).await?;
    let title = page.select(id)?.title.clone();
    println!("🧘 {}", title);

    let cancel = app.interrupt.clone();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;
    page.play();

    let mut played = 0;
    while page.playback().is_playing() && limit.is_none_or(|limit| played < limit) {
        tokio::select! {
            _ = cancel.cancelled() => {
                page.pause();
                break;
            }
            _ = ticker.tick() => {
                page.advance(1);
                played += 1;
                if played % 10 == 0 || page.playback().is_finished() {
                    println!("  {} ({:.0}%)", page.clock(), page.playback().progress());
                }
            }
        }
    }

    if page.playback().is_finished() {
        println!("✅ Session complete");
    } else {
        println!("⏸  Stopped at {}", page.clock());
    }
    Ok(())
}
