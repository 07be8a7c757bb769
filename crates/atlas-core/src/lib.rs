pub mod auth;
pub mod backend;
pub mod books;
pub mod config;
pub mod error;
pub mod forms;
pub mod metrics;
pub mod route;
pub mod session;

// Re-export common error type
pub use error::{AtlasError, Result};
