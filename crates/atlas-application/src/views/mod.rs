//! UI-agnostic view state.
//!
//! Each view owns the state one screen needs (inputs, loading flag, inline
//! error) and exposes its user actions as async methods. A renderer reads the
//! public fields; navigation is returned as a [`Route`](atlas_core::route::Route).

mod landing;
mod login;
mod query;
mod register;

pub use landing::{LandingView, METRICS_FAILED};
pub use login::{LOGIN_FAILED, LoginView};
pub use query::{QueryView, SEARCH_FAILED, search_books};
pub use register::{REGISTER_FAILED, REGISTER_SUCCESS, RegisterView};
