//! HTTP adapters for the Atlas backend.

pub mod api_client;

pub use api_client::AtlasApiClient;
