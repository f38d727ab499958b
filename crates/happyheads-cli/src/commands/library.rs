use anyhow::Result;

use happyheads_application::LibraryPage;
use happyheads_core::filter::Selector;
use happyheads_core::identity::Route;

use crate::bootstrap::App;

pub async fn list(
    app: &App,
    search: String,
    category: Option<String>,
    kind: Option<String>,
) -> Result<()> {
    app.open(Route::Content)?;

    let mut page = LibraryPage::load(&app.content()).await?;
    page.set_search(search);
    page.set_category(Selector::from(category));
    page.set_kind(Selector::from(kind));

    let items = page.visible();
    if items.is_empty() {
        println!("No content matches");
        return Ok(());
    }
    for item in items {
        let favorite = if item.is_favorite { "★" } else { " " };
        let length = item
            .duration
            .map(|minutes| format!(" · {} min", minutes))
            .unwrap_or_default();
        println!("{} {} ({}, {}){}", favorite, item.title, item.kind, item.category, length);
        println!("    {} · rated {:.1}", item.author, item.rating);
    }
    Ok(())
}
