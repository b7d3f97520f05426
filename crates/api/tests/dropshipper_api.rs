//! HTTP-level integration tests for the dropshipper portal order endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use backoffice_db::models::dropshipper::CreateDropshipper;
use backoffice_db::models::order::CreateOrder;
use backoffice_db::repositories::{DropshipperRepo, OrderRepo};

async fn seed_dropshipper(pool: &PgPool, email: &str) -> i64 {
    DropshipperRepo::create(
        pool,
        &CreateDropshipper {
            name: "Order Shop".to_string(),
            email: email.to_string(),
            shopify_domain: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_order(pool: &PgPool, dropshipper_id: i64, number: &str) -> i64 {
    OrderRepo::create(
        pool,
        dropshipper_id,
        &CreateOrder {
            order_number: Some(number.to_string()),
            shopify_order_id: None,
            status: None,
            customer_name: None,
            total_cents: Some(2500),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: order list and fetch are scoped to the caller's account
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_orders_scoped_to_dropshipper(pool: PgPool) {
    let mine = seed_dropshipper(&pool, "mine@test.io").await;
    let other = seed_dropshipper(&pool, "other@test.io").await;

    let order_id = seed_order(&pool, mine, "ORD-1").await;
    seed_order(&pool, other, "ORD-2").await;

    let mine_header = mine.to_string();
    let headers = [
        ("x-dropshipper-id", mine_header.as_str()),
        ("x-dropshipper-role", "dropshipper"),
    ];

    let response = get(build_test_app(pool.clone()), "/api/dropshipper/orders", &headers).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["order_number"], "ORD-1");

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/dropshipper/orders/{order_id}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The other account cannot reach it.
    let other_header = other.to_string();
    let response = get(
        build_test_app(pool),
        &format!("/api/dropshipper/orders/{order_id}"),
        &[
            ("x-dropshipper-id", other_header.as_str()),
            ("x-dropshipper-role", "dropshipper"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: order soft-delete, restore, and bulk delete round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_order_delete_restore_cycle(pool: PgPool) {
    let dropshipper = seed_dropshipper(&pool, "cycle@test.io").await;
    let first = seed_order(&pool, dropshipper, "CYC-1").await;
    let second = seed_order(&pool, dropshipper, "CYC-2").await;

    let header = dropshipper.to_string();
    let headers = [
        ("x-dropshipper-id", header.as_str()),
        ("x-dropshipper-role", "dropshipper"),
    ];

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/dropshipper/orders/{first}"),
        &headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(pool.clone()),
        "/api/dropshipper/orders?status=deleted",
        &headers,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/dropshipper/orders/{first}/restore"),
        &headers,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Bulk delete both plus a bogus id.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/dropshipper/orders/bulk-delete",
        &headers,
        json!({"ids": [first, second, 424242]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["deleted"].as_array().unwrap().len(), 2);
    assert_eq!(body["not_deleted"][0]["id"], 424242);

    let response = get(build_test_app(pool), "/api/dropshipper/orders", &headers).await;
    let body = body_json(response).await;
    assert!(body["orders"].as_array().unwrap().is_empty());
}
