use anyhow::Result;

use happyheads_application::AdminPage;
use happyheads_core::filter::Selector;

use crate::bootstrap::App;

pub async fn show(app: &App, search: String, status: Option<String>) -> Result<()> {
    let mut page = AdminPage::open(&app.session.current(), &app.managed_users()).await?;
    page.set_search(search);
    page.set_status(Selector::from(status));

    let summary = page.summary();
    println!(
        "Users: {} total · {} active · {} inactive",
        summary.total, summary.active, summary.inactive
    );
    for user in page.users() {
        println!(
            "  {:<18} {:<22} {:<8} joined {} · {}",
            user.name,
            user.email,
            user.status.to_string(),
            user.join_date,
            user.last_active
        );
    }
    Ok(())
}
