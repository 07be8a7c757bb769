//! Access control for protected views.

use atlas_core::route::Route;
use atlas_core::session::Restoration;

use crate::session_store::SessionStore;

/// What to show for a requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restoration has not finished; show a neutral loading state.
    Loading,
    /// Navigate elsewhere instead.
    Redirect(Route),
    /// Show the requested view.
    Render(Route),
}

/// Decides whether `route` may be shown right now.
///
/// Unprotected routes always render. A protected route waits for restoration
/// to complete, then renders only while a token is persisted. Token validity
/// is not checked; a revoked token still renders until the backend rejects a
/// call.
pub async fn guard(store: &SessionStore, route: Route) -> GuardDecision {
    if !route.is_protected() {
        return GuardDecision::Render(route);
    }

    if store.restoration().await == Restoration::Pending {
        return GuardDecision::Loading;
    }

    if store.is_authenticated() {
        GuardDecision::Render(route)
    } else {
        tracing::debug!("Redirecting {} to {}", route, Route::Login);
        GuardDecision::Redirect(Route::Login)
    }
}
