//! AtlasApiClient - REST client for the Atlas backend.
//!
//! Every call is a single request with no retry and no client-side timeout.
//! Protected calls receive their credential per request; the client itself
//! holds no authorization state.

use async_trait::async_trait;
use atlas_core::auth::{BearerCredential, Credentials, LoginResponse, RegisteredUser};
use atlas_core::backend::{AtlasBackend, HealthStatus};
use atlas_core::books::{SearchRequest, SearchResult};
use atlas_core::config::AtlasConfig;
use atlas_core::error::{AtlasError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const SEARCH_PATH: &str = "/books/search";
pub const METRICS_PATH: &str = "/metrics";
pub const HEALTH_PATH: &str = "/health";

/// [`AtlasBackend`] implementation over HTTP.
#[derive(Clone, Debug)]
pub struct AtlasApiClient {
    client: Client,
    base_url: String,
}

impl AtlasApiClient {
    /// Creates a client for the given base URL (e.g. `http://localhost:30080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client from the resolved configuration.
    pub fn from_config(config: &AtlasConfig) -> Self {
        Self::new(config.normalized_base_url())
    }

    /// Uses a pre-built `reqwest` client (custom TLS, proxies, ...).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<String> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!("{} request failed: {}", action, err);
            map_transport_error(err)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            tracing::info!("{} rejected by backend with status {}", action, status);
            return Err(map_http_error(status, &body));
        }

        tracing::debug!("{} succeeded with status {}", action, status);
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> Result<T> {
        let body = self.send(request, action).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AtlasBackend for AtlasApiClient {
    async fn register(&self, username: &str, password: &str) -> Result<RegisteredUser> {
        let request = self
            .client
            .post(self.url(REGISTER_PATH))
            .json(&Credentials::new(username, password));
        self.send_json(request, "register").await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(&Credentials::new(username, password));
        self.send_json(request, "login").await
    }

    async fn search_books(
        &self,
        description: &str,
        bearer: &BearerCredential,
    ) -> Result<SearchResult> {
        let request = self
            .client
            .post(self.url(SEARCH_PATH))
            .header(AUTHORIZATION, bearer.header_value())
            .json(&SearchRequest {
                description: description.to_string(),
            });
        self.send_json(request, "search").await
    }

    async fn fetch_metrics(&self) -> Result<String> {
        let request = self.client.get(self.url(METRICS_PATH));
        self.send(request, "metrics").await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let request = self.client.get(self.url(HEALTH_PATH));
        self.send_json(request, "health").await
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: serde_json::Value,
}

/// Builds a backend error, keeping `detail` only when it is a plain string.
///
/// Request validation errors carry a list of objects in `detail`; those fall
/// back to the caller's generic message.
fn map_http_error(status: StatusCode, body: &str) -> AtlasError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|wrapper| match wrapper.detail {
            serde_json::Value::String(detail) => Some(detail),
            _ => None,
        });
    AtlasError::backend(status.as_u16(), detail)
}

fn map_transport_error(err: reqwest::Error) -> AtlasError {
    AtlasError::transport(format!("Atlas API request failed: {err}"))
}
