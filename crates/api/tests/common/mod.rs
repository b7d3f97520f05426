//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as production)
//! and provides small request/response helpers around `tower::ServiceExt`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use backoffice_api::config::ServerConfig;
use backoffice_api::router::build_app_router;
use backoffice_api::state::AppState;

/// Webhook secret used by every test app. Deliveries in tests are signed
/// with this value.
pub const TEST_WEBHOOK_SECRET: &str = "test-webhook-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shopify_webhook_secret: TEST_WEBHOOK_SECRET.to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request with optional identity headers and an optional JSON body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// GET `uri` with the given identity headers.
pub async fn get(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    request(app, Method::GET, uri, headers, None).await
}

/// POST a JSON body to `uri` with the given identity headers.
pub async fn post_json(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
    body: Value,
) -> Response<Body> {
    request(app, Method::POST, uri, headers, Some(body)).await
}

/// PUT a JSON body to `uri` with the given identity headers.
pub async fn put_json(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
    body: Value,
) -> Response<Body> {
    request(app, Method::PUT, uri, headers, Some(body)).await
}

/// DELETE `uri` with the given identity headers.
pub async fn delete(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    request(app, Method::DELETE, uri, headers, None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
