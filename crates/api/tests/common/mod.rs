#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use summit_api::config::{LogFormat, ServerConfig, StorageBackend};
use summit_api::router::build_app_router;
use summit_api::state::AppState;
use summit_db::store::seed::seed_defaults;
use summit_db::store::{MemoryStore, Store};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_backend: StorageBackend::Memory,
        database_url: None,
        seed_defaults: true,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over a fresh in-memory store with the
/// default form and categories.
///
/// Goes through `build_app_router` so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub async fn build_test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    seed_defaults(store.as_ref()).await.unwrap();
    build_app_over(store).await
}

/// Same as [`build_test_app`] but with nothing seeded.
pub async fn build_empty_app() -> Router {
    build_app_over(Arc::new(MemoryStore::new())).await
}

async fn build_app_over(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    state.settings.load().await.unwrap();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request("PUT", uri, body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// POST an arbitrary body labelled as JSON.
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body as JSON; an empty body reads as `null`.
pub async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an idea through the raw endpoint and return its id.
pub async fn create_idea(app: &Router, title: &str, category: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/ideas",
        serde_json::json!({
            "name": "Tester",
            "title": title,
            "description": "",
            "type": category,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}
