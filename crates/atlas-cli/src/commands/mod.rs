pub mod auth;
pub mod browse;
