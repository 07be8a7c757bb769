//! Backend service port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::{BearerCredential, LoginResponse, RegisteredUser};
use crate::books::SearchResult;
use crate::error::Result;

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// The Atlas HTTP API as seen by the client.
///
/// Protected calls take their credential explicitly; implementations must not
/// keep an implicit default `Authorization` header.
#[async_trait]
pub trait AtlasBackend: Send + Sync {
    /// `POST /auth/register`
    async fn register(&self, username: &str, password: &str) -> Result<RegisteredUser>;

    /// `POST /auth/login`
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// `POST /books/search`, always sending `bearer` as the `Authorization` header.
    async fn search_books(
        &self,
        description: &str,
        bearer: &BearerCredential,
    ) -> Result<SearchResult>;

    /// `GET /metrics`, returned as raw exposition text.
    async fn fetch_metrics(&self) -> Result<String>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}
