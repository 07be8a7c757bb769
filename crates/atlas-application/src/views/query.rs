use atlas_core::books::SearchResult;
use atlas_core::error::Result;
use atlas_core::forms::validate_description;
use atlas_core::route::Route;
use std::sync::Arc;

use crate::session_store::SessionStore;

pub const SEARCH_FAILED: &str = "Search failed. Please try again.";

/// Sends one search request carrying the current persisted token.
///
/// The `Authorization` header is always present: `Bearer null` when no token
/// is stored.
pub async fn search_books(store: &SessionStore, description: &str) -> Result<SearchResult> {
    let bearer = store.bearer();
    tracing::info!("Searching books (anonymous: {})", bearer.is_anonymous());
    store.backend().search_books(description, &bearer).await
}

/// Protected search page.
///
/// Overlapping searches are not coordinated: whichever call the caller
/// awaits last decides what is displayed.
pub struct QueryView {
    store: Arc<SessionStore>,
    pub description: String,
    pub results: Option<SearchResult>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QueryView {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            description: String::new(),
            results: None,
            loading: false,
            error: None,
        }
    }

    /// Header greeting for the logged-in user.
    pub async fn welcome(&self) -> String {
        format!(
            "Welcome, {}",
            self.store.username().await.unwrap_or_default()
        )
    }

    /// Submits the current description.
    ///
    /// Blank descriptions are rejected locally and leave the displayed results
    /// alone. A failed search clears them.
    pub async fn search(&mut self) {
        if let Err(e) = validate_description(&self.description) {
            self.error = Some(e.to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        match search_books(&self.store, &self.description).await {
            Ok(results) => {
                tracing::info!(
                    "Search returned {} items for keywords '{}'",
                    results.items.len(),
                    results.query_keywords
                );
                self.results = Some(results);
            }
            Err(e) => {
                self.error = Some(e.user_message(SEARCH_FAILED));
                self.results = None;
            }
        }
        self.loading = false;
    }

    /// Logs out and navigates home.
    pub async fn logout(&mut self) -> Result<Route> {
        self.store.logout().await?;
        self.results = None;
        Ok(Route::Landing)
    }
}
