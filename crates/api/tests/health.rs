//! Integration test for the root-level health endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_ok(pool: PgPool) {
    let response = get(build_test_app(pool), "/health", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
    assert!(body["version"].is_string());
}
