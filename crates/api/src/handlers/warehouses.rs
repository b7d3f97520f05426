//! Supplier-portal handlers for warehouses. Scoped like products.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::models::warehouse::{CreateWarehouse, UpdateWarehouse};
use backoffice_db::repositories::WarehouseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::SupplierPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, ListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/supplier/warehouses
pub async fn list_warehouses(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::View).await?;

    let warehouses = WarehouseRepo::list(
        &state.pool,
        identity.main_account_id,
        params.status.unwrap_or_default(),
    )
    .await?;
    Ok(ok_entity("warehouses", &warehouses))
}

/// GET /api/supplier/warehouses/{id}
pub async fn get_warehouse(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::View).await?;

    let warehouse = WarehouseRepo::find_by_id(&state.pool, identity.main_account_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Warehouse",
            id,
        }))?;
    Ok(ok_entity("warehouse", &warehouse))
}

/// POST /api/supplier/warehouses
pub async fn create_warehouse(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouse>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let warehouse =
        WarehouseRepo::create(&state.pool, identity.main_account_id, &input).await?;

    tracing::info!(
        warehouse_id = warehouse.id,
        supplier_id = identity.main_account_id,
        actor_id = identity.actor_id,
        "Warehouse created",
    );

    Ok((StatusCode::CREATED, ok_entity("warehouse", &warehouse)))
}

/// PUT /api/supplier/warehouses/{id}
pub async fn update_warehouse(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWarehouse>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::Edit).await?;

    let updated = WarehouseRepo::update(&state.pool, identity.main_account_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Warehouse",
            id,
        }))?;

    Ok(ok_entity("warehouse", &updated))
}

/// DELETE /api/supplier/warehouses/{id}
pub async fn delete_warehouse(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::Delete).await?;

    let deleted = WarehouseRepo::soft_delete(
        &state.pool,
        identity.main_account_id,
        id,
        &deleter_of(&identity),
    )
    .await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Warehouse",
            id,
        }));
    }

    tracing::info!(
        warehouse_id = id,
        supplier_id = identity.main_account_id,
        actor_id = identity.actor_id,
        "Warehouse deleted",
    );

    Ok(ok_message("Warehouse deleted successfully"))
}

/// POST /api/supplier/warehouses/{id}/restore
pub async fn restore_warehouse(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::Restore).await?;

    if !WarehouseRepo::restore(&state.pool, identity.main_account_id, id).await? {
        WarehouseRepo::find_by_id(&state.pool, identity.main_account_id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Warehouse",
                id,
            }))?;
    }

    Ok(ok_message("Warehouse restored successfully"))
}

/// POST /api/supplier/warehouses/bulk-delete
pub async fn bulk_delete_warehouses(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::WAREHOUSES, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = WarehouseRepo::bulk_soft_delete(
        &state.pool,
        identity.main_account_id,
        &input.ids,
        &deleter_of(&identity),
    )
    .await?;
    Ok(ok_outcome(&outcome))
}

/// POST /api/supplier/warehouses/permanent-delete
pub async fn permanent_delete_warehouses(
    SupplierPortal(identity): SupplierPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(
        &state.pool,
        &identity,
        modules::WAREHOUSES,
        Action::PermanentDelete,
    )
    .await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome =
        WarehouseRepo::bulk_hard_delete(&state.pool, identity.main_account_id, &input.ids).await?;
    Ok(ok_outcome(&outcome))
}
