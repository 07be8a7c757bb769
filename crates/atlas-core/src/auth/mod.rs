//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: request/response DTOs for the auth endpoints
//! - `credential`: the bearer credential attached to protected requests

mod credential;
mod model;

pub use credential::BearerCredential;
pub use model::{Credentials, LoginResponse, RegisteredUser};
