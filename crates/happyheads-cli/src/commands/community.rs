use anyhow::{anyhow, bail, Result};

use happyheads_application::CommunityPage;
use happyheads_core::filter::{Selector, SortKey};
use happyheads_core::identity::Route;
use happyheads_core::records::PostDraft;

use crate::bootstrap::App;

pub async fn list(app: &App, search: String, category: Option<String>, sort: &str) -> Result<()> {
    app.open(Route::Community)?;

    let sort = SortKey::parse(sort).ok_or_else(|| anyhow!("Unknown sort '{}'", sort))?;

    let mut page = CommunityPage::load(&app.posts()).await?;
    page.view_mut().set_search(search);
    page.view_mut().set_sort(sort);
    page.set_category(Selector::from(category));

    for (category, count) in page.counts() {
        print!("{}({}) ", category, count);
    }
    println!();

    for post in page.visible() {
        println!();
        println!("{}  [{}]", post.title, post.category);
        println!(
            "  by {} · {} likes · {} comments",
            post.author.name, post.likes, post.comments
        );
    }
    Ok(())
}

pub async fn post(app: &App, title: String, content: String, category: String) -> Result<()> {
    app.open(Route::Community)?;

    let Some(author) = app.session.identity() else {
        bail!("Sign in to post");
    };

    let mut page = CommunityPage::load(&app.posts()).await?;
    let post = page.create_post(
        PostDraft {
            title,
            content,
            category,
        },
        &author,
    )?;
    println!("✅ Posted \"{}\" to {}", post.title, post.category);
    Ok(())
}
