//! Supplier-portal handlers for product inventory.
//!
//! Every repository call is scoped by `identity.main_account_id`: a
//! supplier_staff caller operates on the parent supplier's inventory, never
//! on rows keyed by its own staff id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::models::product::{CreateProduct, UpdateProduct};
use backoffice_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::SupplierPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, ListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/supplier/products
pub async fn list_products(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::View).await?;

    let products = ProductRepo::list(
        &state.pool,
        identity.main_account_id,
        params.status.unwrap_or_default(),
    )
    .await?;
    Ok(ok_entity("products", &products))
}

/// GET /api/supplier/products/{id}
pub async fn get_product(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::View).await?;

    let product = ProductRepo::find_by_id(&state.pool, identity.main_account_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(ok_entity("product", &product))
}

/// POST /api/supplier/products
pub async fn create_product(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if input.sku.trim().is_empty() {
        return Err(AppError::BadRequest("sku must not be empty".into()));
    }
    if input.price_cents.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("price_cents must not be negative".into()));
    }

    let product = ProductRepo::create(&state.pool, identity.main_account_id, &input).await?;

    tracing::info!(
        product_id = product.id,
        supplier_id = identity.main_account_id,
        actor_id = identity.actor_id,
        "Product created",
    );

    Ok((StatusCode::CREATED, ok_entity("product", &product)))
}

/// PUT /api/supplier/products/{id}
pub async fn update_product(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::Edit).await?;

    if input.price_cents.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("price_cents must not be negative".into()));
    }

    let updated = ProductRepo::update(&state.pool, identity.main_account_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(ok_entity("product", &updated))
}

/// DELETE /api/supplier/products/{id}
pub async fn delete_product(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::Delete).await?;

    let deleted = ProductRepo::soft_delete(
        &state.pool,
        identity.main_account_id,
        id,
        &deleter_of(&identity),
    )
    .await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    tracing::info!(
        product_id = id,
        supplier_id = identity.main_account_id,
        actor_id = identity.actor_id,
        "Product deleted",
    );

    Ok(ok_message("Product deleted successfully"))
}

/// POST /api/supplier/products/{id}/restore
pub async fn restore_product(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::Restore).await?;

    if !ProductRepo::restore(&state.pool, identity.main_account_id, id).await? {
        ProductRepo::find_by_id(&state.pool, identity.main_account_id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            }))?;
    }

    Ok(ok_message("Product restored successfully"))
}

/// POST /api/supplier/products/bulk-delete
pub async fn bulk_delete_products(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PRODUCTS, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = ProductRepo::bulk_soft_delete(
        &state.pool,
        identity.main_account_id,
        &input.ids,
        &deleter_of(&identity),
    )
    .await?;

    tracing::info!(
        supplier_id = identity.main_account_id,
        actor_id = identity.actor_id,
        deleted = outcome.deleted.len(),
        skipped = outcome.not_deleted.len(),
        "Products bulk-deleted",
    );

    Ok(ok_outcome(&outcome))
}

/// POST /api/supplier/products/permanent-delete
pub async fn permanent_delete_products(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(
        &state.pool,
        &identity,
        modules::PRODUCTS,
        Action::PermanentDelete,
    )
    .await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome =
        ProductRepo::bulk_hard_delete(&state.pool, identity.main_account_id, &input.ids).await?;
    Ok(ok_outcome(&outcome))
}
