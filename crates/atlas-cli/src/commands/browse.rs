use anyhow::{Result, bail};
use atlas_application::presenter::{render_metrics, render_search_result};
use atlas_application::{GuardDecision, LandingView, QueryView, guard};
use atlas_core::route::Route;

use crate::app::App;

pub async fn metrics(app: &App) -> Result<()> {
    let mut view = LandingView::new(app.backend.clone());
    view.load_metrics().await;

    if let Some(error) = view.error {
        bail!(error);
    }
    if let Some(metrics) = &view.metrics {
        print!("{}", render_metrics(metrics));
    }
    Ok(())
}

pub async fn search(app: &App, description: String) -> Result<()> {
    match guard(&app.store, Route::Query).await {
        GuardDecision::Render(_) => {}
        GuardDecision::Redirect(_) => bail!("Not logged in. Run `atlas login` first."),
        GuardDecision::Loading => bail!("Session is still being restored"),
    }

    let mut view = QueryView::new(app.store.clone());
    view.description = description;
    println!("{}", view.welcome().await);
    view.search().await;

    if let Some(error) = view.error {
        bail!(error);
    }
    if let Some(results) = &view.results {
        print!("{}", render_search_result(results));
    }
    Ok(())
}

pub async fn health(app: &App) -> Result<()> {
    let status = app.backend.health().await?;
    println!("Backend status: {}", status.status);
    Ok(())
}
