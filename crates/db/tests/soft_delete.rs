//! Integration tests for soft-delete, restore, and hard-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted rows are hidden from `find_by_id` and default list queries
//! - The `?status=deleted` filter surfaces only soft-deleted rows
//! - Soft deletion stamps the deleting actor and its role
//! - Restoring a soft-deleted row makes it visible again
//! - Soft-delete is idempotent (second call returns `false`)
//! - Owner-scoped tables never touch rows belonging to another account

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::roles::Role;
use backoffice_db::models::product::CreateProduct;
use backoffice_db::models::supplier::CreateSupplier;
use backoffice_db::repositories::{Deleter, ProductRepo, SupplierRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_supplier(name: &str, email: &str) -> CreateSupplier {
    CreateSupplier {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        company_name: Some("Soft Delete Test Co".to_string()),
    }
}

fn new_product(name: &str, sku: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        sku: sku.to_string(),
        description: None,
        price_cents: Some(1500),
        stock_qty: Some(10),
    }
}

fn admin_deleter() -> Deleter {
    Deleter {
        id: 1,
        role: Role::Admin,
    }
}

// ---------------------------------------------------------------------------
// Test: soft_delete hides entity from find_by_id
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_soft_delete_hides_from_find_by_id(pool: PgPool) {
    let supplier = SupplierRepo::create(&pool, &new_supplier("Hidden", "hidden@test.io"))
        .await
        .unwrap();

    let deleted = SupplierRepo::soft_delete(&pool, supplier.id, &admin_deleter())
        .await
        .unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    let found = SupplierRepo::find_by_id(&pool, supplier.id).await.unwrap();
    assert!(
        found.is_none(),
        "find_by_id should return None for soft-deleted supplier"
    );
}

// ---------------------------------------------------------------------------
// Test: soft_delete hides entity from the default list, shows under deleted
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_soft_delete_moves_row_between_list_filters(pool: PgPool) {
    let supplier = SupplierRepo::create(&pool, &new_supplier("Listed", "listed@test.io"))
        .await
        .unwrap();

    let before = SupplierRepo::list(&pool, DeleteFilter::NotDeleted)
        .await
        .unwrap();
    assert!(
        before.iter().any(|s| s.id == supplier.id),
        "supplier should appear in the default list before soft delete"
    );

    SupplierRepo::soft_delete(&pool, supplier.id, &admin_deleter())
        .await
        .unwrap();

    let after = SupplierRepo::list(&pool, DeleteFilter::NotDeleted)
        .await
        .unwrap();
    assert!(
        !after.iter().any(|s| s.id == supplier.id),
        "supplier should not appear in the default list after soft delete"
    );

    let trashed = SupplierRepo::list(&pool, DeleteFilter::Deleted)
        .await
        .unwrap();
    assert!(
        trashed.iter().any(|s| s.id == supplier.id),
        "supplier should appear under the deleted filter"
    );
}

// ---------------------------------------------------------------------------
// Test: soft_delete stamps the deleting actor
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_soft_delete_stamps_deleter(pool: PgPool) {
    let supplier = SupplierRepo::create(&pool, &new_supplier("Stamped", "stamped@test.io"))
        .await
        .unwrap();

    let deleter = Deleter {
        id: 42,
        role: Role::AdminStaff,
    };
    SupplierRepo::soft_delete(&pool, supplier.id, &deleter)
        .await
        .unwrap();

    // Raw query: find_by_id intentionally hides soft-deleted rows.
    let row: (bool, Option<i64>, Option<String>) = sqlx::query_as(
        "SELECT deleted_at IS NOT NULL, deleted_by, deleted_by_role FROM suppliers WHERE id = $1",
    )
    .bind(supplier.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(row.0, "deleted_at should be stamped");
    assert_eq!(row.1, Some(42));
    assert_eq!(row.2.as_deref(), Some("admin_staff"));
}

// ---------------------------------------------------------------------------
// Test: restore makes entity visible again and clears the deletion stamp
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_restore_makes_visible_again(pool: PgPool) {
    let supplier = SupplierRepo::create(&pool, &new_supplier("Restore Me", "restore@test.io"))
        .await
        .unwrap();

    SupplierRepo::soft_delete(&pool, supplier.id, &admin_deleter())
        .await
        .unwrap();

    let restored = SupplierRepo::restore(&pool, supplier.id).await.unwrap();
    assert!(restored, "restore should return true");

    let found = SupplierRepo::find_by_id(&pool, supplier.id)
        .await
        .unwrap()
        .expect("find_by_id should return Some after restore");
    assert_eq!(found.name, "Restore Me");
    assert!(found.deleted_at.is_none());
    assert!(found.deleted_by.is_none());
    assert!(found.deleted_by_role.is_none());
}

// ---------------------------------------------------------------------------
// Test: soft_delete and restore are idempotent
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_soft_delete_and_restore_idempotent(pool: PgPool) {
    let supplier = SupplierRepo::create(&pool, &new_supplier("Twice", "twice@test.io"))
        .await
        .unwrap();

    let first = SupplierRepo::soft_delete(&pool, supplier.id, &admin_deleter())
        .await
        .unwrap();
    assert!(first, "first soft_delete should return true");

    let second = SupplierRepo::soft_delete(&pool, supplier.id, &admin_deleter())
        .await
        .unwrap();
    assert!(
        !second,
        "second soft_delete should return false (already deleted)"
    );

    assert!(SupplierRepo::restore(&pool, supplier.id).await.unwrap());
    assert!(
        !SupplierRepo::restore(&pool, supplier.id).await.unwrap(),
        "restoring a live row should return false"
    );
}

// ---------------------------------------------------------------------------
// Test: owner scope keeps one supplier's deletions away from another's rows
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_owner_scope_isolates_suppliers(pool: PgPool) {
    let alpha = SupplierRepo::create(&pool, &new_supplier("Alpha", "alpha@test.io"))
        .await
        .unwrap();
    let beta = SupplierRepo::create(&pool, &new_supplier("Beta", "beta@test.io"))
        .await
        .unwrap();

    let product = ProductRepo::create(&pool, alpha.id, &new_product("Widget", "WID-1"))
        .await
        .unwrap();

    // Beta cannot see or delete Alpha's product.
    let seen = ProductRepo::find_by_id(&pool, beta.id, product.id)
        .await
        .unwrap();
    assert!(seen.is_none(), "other supplier should not see the product");

    let deleter = Deleter {
        id: beta.id,
        role: Role::Supplier,
    };
    let deleted = ProductRepo::soft_delete(&pool, beta.id, product.id, &deleter)
        .await
        .unwrap();
    assert!(!deleted, "other supplier's delete should affect zero rows");

    // Alpha still sees it.
    assert!(ProductRepo::find_by_id(&pool, alpha.id, product.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Test: active filter additionally requires is_active
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_active_filter_excludes_deactivated_rows(pool: PgPool) {
    let supplier = SupplierRepo::create(&pool, &new_supplier("Dormant", "dormant@test.io"))
        .await
        .unwrap();

    sqlx::query("UPDATE suppliers SET is_active = FALSE WHERE id = $1")
        .bind(supplier.id)
        .execute(&pool)
        .await
        .unwrap();

    let active = SupplierRepo::list(&pool, DeleteFilter::Active).await.unwrap();
    assert!(
        !active.iter().any(|s| s.id == supplier.id),
        "deactivated supplier should be hidden from the active filter"
    );

    let not_deleted = SupplierRepo::list(&pool, DeleteFilter::NotDeleted)
        .await
        .unwrap();
    assert!(
        not_deleted.iter().any(|s| s.id == supplier.id),
        "deactivated supplier is still not soft-deleted"
    );
}
