//! Application layer for Atlas.
//!
//! This crate coordinates the domain types in `atlas-core` with an injected
//! backend and key-value storage: the session store, the route guard and the
//! per-screen view state. Nothing here knows about HTTP or the filesystem.

pub mod presenter;
pub mod route_guard;
pub mod session_store;
pub mod views;

#[cfg(test)]
mod test_support;

pub use route_guard::{GuardDecision, guard};
pub use session_store::SessionStore;
pub use views::{LandingView, LoginView, QueryView, RegisterView, search_books};
