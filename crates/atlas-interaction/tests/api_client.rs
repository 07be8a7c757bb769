use atlas_core::auth::BearerCredential;
use atlas_core::backend::AtlasBackend;
use atlas_interaction::AtlasApiClient;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
struct Captured {
    path: &'static str,
    authorization: Option<String>,
    content_type: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl Recorder {
    fn record(&self, path: &'static str, headers: &HeaderMap, body: Value) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.requests.lock().unwrap().push(Captured {
            path,
            authorization: header("authorization"),
            content_type: header("content-type"),
            body,
        });
    }

    fn take(&self) -> Vec<Captured> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

async fn register(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorder.record("/auth/register", &headers, body.clone());
    if body["username"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Username already exists"})),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({"id": 7, "username": body["username"], "is_active": true})),
    )
}

async fn login(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorder.record("/auth/login", &headers, body.clone());
    if body["password"] != "password123" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"access_token": "jwt-token", "token_type": "bearer"})),
    )
}

async fn search(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorder.record("/books/search", &headers, body.clone());
    if body["description"] == "explode" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "Ollama service unavailable"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "total_items": 1,
            "query_keywords": "action superhero comics",
            "items": [{
                "title": "Hero Rising",
                "authors": ["Jane Doe", "John Roe"],
                "categories": ["Comics"],
                "description": "A hero rises.",
                "thumbnail": null
            }]
        })),
    )
}

async fn metrics(State(recorder): State<Recorder>, headers: HeaderMap) -> &'static str {
    recorder.record("/metrics", &headers, Value::Null);
    "# TYPE http_requests_total counter\n\
     http_requests_total{endpoint=\"/\",method=\"GET\",status=\"200\"} 12.0\n\
     active_requests{endpoint=\"/books/search\"} 1.0\n"
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn spawn_backend(recorder: Recorder) -> String {
    let app = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/books/search", post(search))
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .with_state(recorder);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_search_sends_exactly_one_request_with_bearer_token() {
    let recorder = Recorder::default();
    let client = AtlasApiClient::new(spawn_backend(recorder.clone()).await);

    let bearer = BearerCredential::from_token(Some("tok".to_string()));
    let result = client
        .search_books("action superhero books", &bearer)
        .await
        .expect("search should succeed");

    assert_eq!(result.total_items, 1);
    assert_eq!(result.items[0].title, "Hero Rising");
    assert!(result.items[0].thumbnail.is_none());

    let requests = recorder.take();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/books/search");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok"));
    assert_eq!(
        requests[0].body,
        json!({"description": "action superhero books"})
    );
}

#[tokio::test]
async fn test_search_without_token_sends_literal_null() {
    let recorder = Recorder::default();
    let client = AtlasApiClient::new(spawn_backend(recorder.clone()).await);

    client
        .search_books("space opera", &BearerCredential::anonymous())
        .await
        .unwrap();

    let requests = recorder.take();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer null"));
}

#[tokio::test]
async fn test_search_error_surfaces_detail() {
    let client = AtlasApiClient::new(spawn_backend(Recorder::default()).await);

    let err = client
        .search_books("explode", &BearerCredential::anonymous())
        .await
        .unwrap_err();
    assert!(err.is_backend());
    assert_eq!(err.detail(), Some("Ollama service unavailable"));
}

#[tokio::test]
async fn test_login_and_register_carry_no_authorization_header() {
    let recorder = Recorder::default();
    let client = AtlasApiClient::new(spawn_backend(recorder.clone()).await);

    let user = client.register("alice", "password123").await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "alice");
    assert!(user.is_active);

    let token = client.login("alice", "password123").await.unwrap();
    assert_eq!(token.access_token, "jwt-token");
    assert_eq!(token.token_type, "bearer");

    let requests = recorder.take();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.authorization.is_none()));
    assert_eq!(
        requests[1].body,
        json!({"username": "alice", "password": "password123"})
    );
}

#[tokio::test]
async fn test_login_failure_keeps_backend_detail() {
    let client = AtlasApiClient::new(spawn_backend(Recorder::default()).await);

    let err = client.login("alice", "wrongpass").await.unwrap_err();
    assert_eq!(err.detail(), Some("Invalid credentials"));
    assert_eq!(err.user_message("Login failed."), "Invalid credentials");
}

#[tokio::test]
async fn test_register_conflict() {
    let client = AtlasApiClient::new(spawn_backend(Recorder::default()).await);

    let err = client.register("taken", "password123").await.unwrap_err();
    assert_eq!(err.detail(), Some("Username already exists"));
}

#[tokio::test]
async fn test_fetch_metrics_returns_raw_text() {
    let client = AtlasApiClient::new(spawn_backend(Recorder::default()).await);

    let raw = client.fetch_metrics().await.unwrap();
    assert!(raw.contains("http_requests_total"));
    let summary = atlas_core::metrics::parse_metrics(&raw);
    assert_eq!(summary.total_requests, 12.0);
    assert_eq!(summary.active_requests, 1.0);
}

#[tokio::test]
async fn test_fetch_metrics_is_a_plain_get() {
    let recorder = Recorder::default();
    let client = AtlasApiClient::new(spawn_backend(recorder.clone()).await);

    client.fetch_metrics().await.unwrap();

    let requests = recorder.take();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/metrics");
    assert!(requests[0].content_type.is_none());
    assert!(requests[0].authorization.is_none());
}

#[tokio::test]
async fn test_health() {
    let client = AtlasApiClient::new(spawn_backend(Recorder::default()).await);
    assert_eq!(client.health().await.unwrap().status, "healthy");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Grab a free port and release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AtlasApiClient::new(format!("http://{}", addr));
    let err = client.fetch_metrics().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.user_message("Failed to load metrics"), "Failed to load metrics");
}
