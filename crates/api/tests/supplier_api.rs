//! HTTP-level integration tests for the supplier portal.
//!
//! Everything in this portal is scoped to the resolved supplier main
//! account; staff callers operate on their parent's inventory, never their
//! own staff id.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use backoffice_db::models::permission::PermissionEntry;
use backoffice_db::models::staff::CreateStaff;
use backoffice_db::models::supplier::CreateSupplier;
use backoffice_db::repositories::{PermissionRepo, StaffRepo, SupplierRepo};

async fn seed_supplier(pool: &PgPool, name: &str, email: &str) -> i64 {
    SupplierRepo::create(
        pool,
        &CreateSupplier {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company_name: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: product CRUD through the portal is scoped to the caller's account
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_products_scoped_to_owning_supplier(pool: PgPool) {
    let alpha = seed_supplier(&pool, "Alpha", "alpha@test.io").await;
    let beta = seed_supplier(&pool, "Beta", "beta@test.io").await;

    let alpha_header = alpha.to_string();
    let alpha_headers = [
        ("x-supplier-id", alpha_header.as_str()),
        ("x-supplier-role", "supplier"),
    ];
    let beta_header = beta.to_string();
    let beta_headers = [
        ("x-supplier-id", beta_header.as_str()),
        ("x-supplier-role", "supplier"),
    ];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/supplier/products",
        &alpha_headers,
        json!({"name": "Widget", "sku": "WID-1", "price_cents": 1500}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["product"]["id"].as_i64().unwrap();

    // Alpha sees its product.
    let response = get(build_test_app(pool.clone()), "/api/supplier/products", &alpha_headers).await;
    let body = body_json(response).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 1);

    // Beta sees an empty list and gets a 404 on direct fetch.
    let response = get(build_test_app(pool.clone()), "/api/supplier/products", &beta_headers).await;
    let body = body_json(response).await;
    assert!(body["products"].as_array().unwrap().is_empty());

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/supplier/products/{id}"),
        &beta_headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Beta cannot delete Alpha's product either.
    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/supplier/products/{id}"),
        &beta_headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        build_test_app(pool),
        &format!("/api/supplier/products/{id}"),
        &alpha_headers,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: supplier staff act on the parent account's inventory
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_staff_operate_on_parent_inventory(pool: PgPool) {
    // Burn one supplier id so the parent id and staff id cannot collide;
    // otherwise the scoping assertion below would hold either way.
    seed_supplier(&pool, "Decoy Co", "decoy-co@test.io").await;
    let supplier = seed_supplier(&pool, "Parent Co", "parent-co@test.io").await;
    let staff = StaffRepo::create(
        &pool,
        &CreateStaff {
            parent_id: supplier,
            role: "supplier_staff".to_string(),
            name: "Inventory Staffer".to_string(),
            email: "inv-staff@test.io".to_string(),
        },
    )
    .await
    .unwrap();
    assert_ne!(staff.id, supplier);

    // Grant the staffer product view + add.
    for (action, status) in [("view", true), ("add", true)] {
        PermissionRepo::upsert(
            &pool,
            staff.id,
            &PermissionEntry {
                panel: "supplier".to_string(),
                module: "products".to_string(),
                action: action.to_string(),
                status,
            },
        )
        .await
        .unwrap();
    }

    let staff_header = staff.id.to_string();
    let staff_headers = [
        ("x-supplier-id", staff_header.as_str()),
        ("x-supplier-role", "supplier_staff"),
    ];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/supplier/products",
        &staff_headers,
        json!({"name": "Staff Widget", "sku": "SW-1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(
        body["product"]["supplier_id"].as_i64(),
        Some(supplier),
        "the product must belong to the parent account, not the staff id"
    );

    // The main account sees what its staff created.
    let supplier_header = supplier.to_string();
    let response = get(
        build_test_app(pool),
        "/api/supplier/products",
        &[
            ("x-supplier-id", supplier_header.as_str()),
            ("x-supplier-role", "supplier"),
        ],
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: duplicate SKU is scoped per supplier
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sku_unique_per_supplier(pool: PgPool) {
    let alpha = seed_supplier(&pool, "Sku Alpha", "sku-alpha@test.io").await;
    let beta = seed_supplier(&pool, "Sku Beta", "sku-beta@test.io").await;

    let alpha_header = alpha.to_string();
    let alpha_headers = [
        ("x-supplier-id", alpha_header.as_str()),
        ("x-supplier-role", "supplier"),
    ];
    let beta_header = beta.to_string();
    let beta_headers = [
        ("x-supplier-id", beta_header.as_str()),
        ("x-supplier-role", "supplier"),
    ];

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/supplier/products",
        &alpha_headers,
        json!({"name": "One", "sku": "SAME"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same SKU under the same supplier conflicts.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/supplier/products",
        &alpha_headers,
        json!({"name": "Two", "sku": "SAME"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Another supplier may reuse it.
    let response = post_json(
        build_test_app(pool),
        "/api/supplier/products",
        &beta_headers,
        json!({"name": "Three", "sku": "SAME"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
