use anyhow::{bail, Result};

use happyheads_core::identity::{AccessDecision, Route, SessionState};

use crate::bootstrap::App;

pub async fn sign_in(app: &App, email: &str, password: &str) -> Result<()> {
    let identity = app
        .session
        .sign_in(email, password, app.interrupt.clone())
        .await?;
    println!("✅ Signed in as {} ({})", identity.name, identity.role);
    Ok(())
}

pub async fn register(app: &App, email: &str, password: &str, name: &str) -> Result<()> {
    let identity = app
        .session
        .register(email, password, name, app.interrupt.clone())
        .await?;
    println!("✅ Welcome, {}! Account {} created", identity.name, identity.id);
    Ok(())
}

pub async fn sign_out(app: &App) -> Result<()> {
    app.session.sign_out().await;
    println!("👋 Signed out");
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    match app.session.current() {
        SessionState::Authenticated(identity) => {
            println!("{} <{}>", identity.name, identity.email);
            println!("  id:   {}", identity.id);
            println!("  role: {}", identity.role);
        }
        SessionState::Unauthenticated | SessionState::Loading => println!("Not signed in"),
    }
    Ok(())
}

pub fn access(app: &App, path: &str) -> Result<()> {
    let Some(route) = Route::from_path(path) else {
        bail!("Unknown page '{}'", path);
    };
    match app.session.authorize(route) {
        AccessDecision::Granted => println!("✓ {} is open", route),
        AccessDecision::Pending => println!("… {} is waiting for the session", route),
        AccessDecision::Redirect(target) => println!("✗ {} redirects to {}", route, target),
    }
    Ok(())
}
