//! Admin-portal handlers for supplier management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::models::supplier::{CreateSupplier, UpdateSupplier};
use backoffice_db::repositories::SupplierRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::AdminPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, ListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/admin/suppliers
pub async fn list_suppliers(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::View).await?;

    let suppliers = SupplierRepo::list(&state.pool, params.status.unwrap_or_default()).await?;
    Ok(ok_entity("suppliers", &suppliers))
}

/// GET /api/admin/suppliers/{id}
pub async fn get_supplier(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::View).await?;

    let supplier = SupplierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }))?;
    Ok(ok_entity("supplier", &supplier))
}

/// POST /api/admin/suppliers
pub async fn create_supplier(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateSupplier>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if !input.email.contains('@') {
        return Err(AppError::BadRequest("email must be a valid address".into()));
    }

    let supplier = SupplierRepo::create(&state.pool, &input).await?;

    tracing::info!(
        supplier_id = supplier.id,
        actor_id = identity.actor_id,
        role = %identity.role,
        "Supplier created",
    );

    Ok((StatusCode::CREATED, ok_entity("supplier", &supplier)))
}

/// PUT /api/admin/suppliers/{id}
pub async fn update_supplier(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupplier>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::Edit).await?;

    let updated = SupplierRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }))?;

    tracing::info!(supplier_id = id, actor_id = identity.actor_id, "Supplier updated");

    Ok(ok_entity("supplier", &updated))
}

/// DELETE /api/admin/suppliers/{id}
pub async fn delete_supplier(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::Delete).await?;

    let deleted = SupplierRepo::soft_delete(&state.pool, id, &deleter_of(&identity)).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }));
    }

    tracing::info!(supplier_id = id, actor_id = identity.actor_id, "Supplier deleted");

    Ok(ok_message("Supplier deleted successfully"))
}

/// POST /api/admin/suppliers/{id}/restore
pub async fn restore_supplier(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::Restore).await?;

    if !SupplierRepo::restore(&state.pool, id).await? {
        // Restoring an already-live row is a no-op, not an error.
        SupplierRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Supplier",
                id,
            }))?;
    }

    tracing::info!(supplier_id = id, actor_id = identity.actor_id, "Supplier restored");

    Ok(ok_message("Supplier restored successfully"))
}

/// POST /api/admin/suppliers/bulk-delete
pub async fn bulk_delete_suppliers(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::SUPPLIERS, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome =
        SupplierRepo::bulk_soft_delete(&state.pool, &input.ids, &deleter_of(&identity)).await?;

    tracing::info!(
        actor_id = identity.actor_id,
        deleted = outcome.deleted.len(),
        skipped = outcome.not_deleted.len(),
        "Suppliers bulk-deleted",
    );

    Ok(ok_outcome(&outcome))
}

/// POST /api/admin/suppliers/permanent-delete
pub async fn permanent_delete_suppliers(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(
        &state.pool,
        &identity,
        modules::SUPPLIERS,
        Action::PermanentDelete,
    )
    .await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = SupplierRepo::bulk_hard_delete(&state.pool, &input.ids).await?;

    tracing::info!(
        actor_id = identity.actor_id,
        purged = outcome.deleted.len(),
        skipped = outcome.not_deleted.len(),
        "Suppliers permanently deleted",
    );

    Ok(ok_outcome(&outcome))
}
