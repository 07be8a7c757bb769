use anyhow::{Result, bail};
use atlas_application::{LoginView, RegisterView};
use atlas_core::forms::{LoginForm, RegisterForm};

use crate::app::App;

pub async fn register(
    app: &App,
    username: String,
    password: String,
    confirm: String,
) -> Result<()> {
    let mut view = RegisterView::new(app.backend.clone());
    view.form = RegisterForm::new(username, password, confirm);

    match view.submit().await {
        Some(next) => {
            if let Some(message) = &view.success {
                println!("{}", message);
            }
            println!("Next: atlas {}", next.path().trim_start_matches('/'));
            Ok(())
        }
        None => bail!(view.error.unwrap_or_default()),
    }
}

pub async fn login(app: &App, username: String, password: String) -> Result<()> {
    let mut view = LoginView::new(app.store.clone());
    view.form = LoginForm::new(username, password);

    if view.submit().await.is_none() {
        bail!(view.error.unwrap_or_default());
    }
    println!(
        "Welcome, {}",
        app.store.username().await.unwrap_or_default()
    );
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    app.store.logout().await?;
    println!("Logged out");
    Ok(())
}

pub async fn status(app: &App) {
    match app.store.username().await {
        Some(username) if app.store.is_authenticated() => {
            println!("Logged in as {}", username)
        }
        _ => println!("Not logged in"),
    }
}
