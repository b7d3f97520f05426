//! HTTP-level integration tests for the admin portal endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Admin accounts are seeded via the repository layer; everything else goes
//! through the HTTP API to verify the envelope, status codes, and soft-delete
//! life cycle end to end.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

use backoffice_db::models::admin::CreateAdmin;
use backoffice_db::repositories::AdminRepo;

async fn seed_admin(pool: &PgPool) -> i64 {
    AdminRepo::create(
        pool,
        &CreateAdmin {
            name: "Root Admin".to_string(),
            email: "root@test.io".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: supplier create / get round trip with the envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_get_supplier(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Acme Supplies", "email": "acme@test.io"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["supplier"]["name"], "Acme Supplies");
    let id = body["supplier"]["id"].as_i64().unwrap();

    let response = get(
        build_test_app(pool),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["supplier"]["email"], "acme@test.io");
}

// ---------------------------------------------------------------------------
// Test: soft-deleted supplier disappears from the default list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_soft_delete_hides_supplier_from_list(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Vanishing", "email": "vanish@test.io"}),
    )
    .await;
    let id = body_json(response).await["supplier"]["id"].as_i64().unwrap();

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], true);

    // Gone from the default list.
    let response = get(build_test_app(pool.clone()), "/api/admin/suppliers", &headers).await;
    let body = body_json(response).await;
    assert!(!body["suppliers"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"].as_i64() == Some(id)));

    // Present under ?status=deleted.
    let response = get(
        build_test_app(pool.clone()),
        "/api/admin/suppliers?status=deleted",
        &headers,
    )
    .await;
    let body = body_json(response).await;
    assert!(body["suppliers"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"].as_i64() == Some(id)));

    // 404 on direct fetch.
    let response = get(
        build_test_app(pool),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: restore brings a supplier back; restoring a live row is a no-op
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_restore_supplier(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Phoenix", "email": "phoenix@test.io"}),
    )
    .await;
    let id = body_json(response).await["supplier"]["id"].as_i64().unwrap();

    delete(
        build_test_app(pool.clone()),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
    )
    .await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/admin/suppliers/{id}/restore"),
        &headers,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Restoring the now-live row again succeeds without changing anything.
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/admin/suppliers/{id}/restore"),
        &headers,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Restoring an id that never existed is a 404.
    let response = post_json(
        build_test_app(pool),
        "/api/admin/suppliers/999999/restore",
        &headers,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: partial update only touches provided fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_supplier_is_partial(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Before", "email": "before@test.io", "company_name": "Keep Co"}),
    )
    .await;
    let id = body_json(response).await["supplier"]["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
        json!({"name": "After"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["supplier"]["name"], "After");
    assert_eq!(body["supplier"]["email"], "before@test.io");
    assert_eq!(body["supplier"]["company_name"], "Keep Co");
}

// ---------------------------------------------------------------------------
// Test: duplicate email surfaces as 409 with the error envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_conflicts(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "First", "email": "dup@test.io"}),
    )
    .await;

    let response = post_json(
        build_test_app(pool),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Second", "email": "dup@test.io"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["status"], false);
    assert!(body["error"].as_str().unwrap().contains("unique"));
}

// ---------------------------------------------------------------------------
// Test: bulk delete reports the partial outcome over HTTP
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_partial_success(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Bulk", "email": "bulk@test.io"}),
    )
    .await;
    let id = body_json(response).await["supplier"]["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers/bulk-delete",
        &headers,
        json!({"ids": [id, 888888]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["deleted"], json!([id]));
    assert_eq!(body["not_deleted"][0]["id"], 888888);
    assert_eq!(body["not_deleted"][0]["reason"], "not found");

    // An empty id list is rejected before touching the database.
    let response = post_json(
        build_test_app(pool),
        "/api/admin/suppliers/bulk-delete",
        &headers,
        json!({"ids": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: permanent delete only purges rows already in the trash
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_permanent_delete_requires_soft_delete(pool: PgPool) {
    let admin_id = seed_admin(&pool).await.to_string();
    let headers = [("x-admin-id", admin_id.as_str()), ("x-admin-role", "admin")];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers",
        &headers,
        json!({"name": "Still Live", "email": "live@test.io"}),
    )
    .await;
    let id = body_json(response).await["supplier"]["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/suppliers/permanent-delete",
        &headers,
        json!({"ids": [id]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["not_deleted"][0]["reason"], "not deleted");

    // The live row survives.
    let response = get(
        build_test_app(pool),
        &format!("/api/admin/suppliers/{id}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
