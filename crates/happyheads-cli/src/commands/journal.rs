use std::sync::Arc;

use anyhow::Result;

use happyheads_application::JournalPage;
use happyheads_core::filter::Selector;
use happyheads_core::identity::Route;

use crate::bootstrap::App;

pub async fn list(app: &App, search: String, tag: Option<String>) -> Result<()> {
    app.open(Route::Journal)?;

    let mut page = JournalPage::new(Arc::new(app.journal_repository()));
    page.set_search(search);
    page.set_tag(Selector::from(tag));

    println!("Tags: {}", page.all_tags().await?.join(", "));
    for entry in page.visible().await? {
        println!();
        let mood = entry
            .mood
            .map(|mood| format!(" {}", mood.emoji()))
            .unwrap_or_default();
        println!("{} · {}{}", entry.date.format("%Y-%m-%d"), entry.title, mood);
        println!("  {}", entry.content);
        if !entry.tags.is_empty() {
            println!("  #{}", entry.tags.join(" #"));
        }
    }
    Ok(())
}
