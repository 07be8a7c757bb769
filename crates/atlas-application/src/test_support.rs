//! Mock backend and storage shared by the unit tests of this crate.

use async_trait::async_trait;
use atlas_core::auth::{BearerCredential, LoginResponse, RegisteredUser};
use atlas_core::backend::{AtlasBackend, HealthStatus};
use atlas_core::books::{Book, SearchResult};
use atlas_core::error::{AtlasError, Result};
use atlas_core::session::{InMemoryKeyValueStore, KeyValueStore};
use std::sync::Mutex;

/// A backend call as recorded by [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Register { username: String },
    Login { username: String },
    Search { description: String, authorization: String },
    Metrics,
    Health,
}

/// Canned-response backend that records every call it receives.
pub struct MockBackend {
    calls: Mutex<Vec<Call>>,
    register: Result<RegisteredUser>,
    login: Result<LoginResponse>,
    search: Result<SearchResult>,
    metrics: Result<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            register: Ok(RegisteredUser {
                id: 1,
                username: "testuser".to_string(),
                is_active: true,
            }),
            login: Ok(LoginResponse {
                access_token: "T".to_string(),
                token_type: "bearer".to_string(),
            }),
            search: Ok(sample_result()),
            metrics: Ok(String::new()),
        }
    }

    pub fn with_register(mut self, result: Result<RegisteredUser>) -> Self {
        self.register = result;
        self
    }

    pub fn with_login(mut self, result: Result<LoginResponse>) -> Self {
        self.login = result;
        self
    }

    pub fn with_search(mut self, result: Result<SearchResult>) -> Self {
        self.search = result;
        self
    }

    pub fn with_metrics(mut self, result: Result<String>) -> Self {
        self.metrics = result;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AtlasBackend for MockBackend {
    async fn register(&self, username: &str, _password: &str) -> Result<RegisteredUser> {
        self.record(Call::Register {
            username: username.to_string(),
        });
        self.register.clone()
    }

    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse> {
        self.record(Call::Login {
            username: username.to_string(),
        });
        self.login.clone()
    }

    async fn search_books(
        &self,
        description: &str,
        bearer: &BearerCredential,
    ) -> Result<SearchResult> {
        self.record(Call::Search {
            description: description.to_string(),
            authorization: bearer.header_value(),
        });
        self.search.clone()
    }

    async fn fetch_metrics(&self) -> Result<String> {
        self.record(Call::Metrics);
        self.metrics.clone()
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record(Call::Health);
        Ok(HealthStatus {
            status: "healthy".to_string(),
        })
    }
}

pub fn sample_result() -> SearchResult {
    SearchResult {
        total_items: 1,
        query_keywords: "action superhero comics".to_string(),
        items: vec![Book {
            title: "Hero Rising".to_string(),
            authors: Some(vec!["Jane Doe".to_string(), "John Roe".to_string()]),
            categories: Some(vec!["Comics".to_string(), "Fiction".to_string()]),
            description: Some("A hero rises.".to_string()),
            thumbnail: None,
        }],
    }
}

pub fn backend_error(status: u16, detail: &str) -> AtlasError {
    AtlasError::backend(status, Some(detail.to_string()))
}

/// In-memory store that can be told to fail reads or writes of one key.
#[derive(Default)]
pub struct FaultyStore {
    inner: InMemoryKeyValueStore,
    fail_reads: bool,
    fail_set: Option<&'static str>,
}

impl FaultyStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_set(key: &'static str) -> Self {
        Self {
            fail_set: Some(key),
            ..Default::default()
        }
    }

    pub fn inner(&self) -> &InMemoryKeyValueStore {
        &self.inner
    }
}

impl KeyValueStore for FaultyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(AtlasError::storage("disk unavailable"));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_set == Some(key) {
            return Err(AtlasError::storage("disk full"));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}
