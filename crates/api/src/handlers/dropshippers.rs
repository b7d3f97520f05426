//! Admin-portal handlers for dropshipper management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::models::dropshipper::{CreateDropshipper, UpdateDropshipper};
use backoffice_db::repositories::DropshipperRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::AdminPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, ListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/admin/dropshippers
pub async fn list_dropshippers(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::View).await?;

    let dropshippers =
        DropshipperRepo::list(&state.pool, params.status.unwrap_or_default()).await?;
    Ok(ok_entity("dropshippers", &dropshippers))
}

/// GET /api/admin/dropshippers/{id}
pub async fn get_dropshipper(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::View).await?;

    let dropshipper = DropshipperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dropshipper",
            id,
        }))?;
    Ok(ok_entity("dropshipper", &dropshipper))
}

/// POST /api/admin/dropshippers
pub async fn create_dropshipper(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateDropshipper>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if !input.email.contains('@') {
        return Err(AppError::BadRequest("email must be a valid address".into()));
    }

    let dropshipper = DropshipperRepo::create(&state.pool, &input).await?;

    tracing::info!(
        dropshipper_id = dropshipper.id,
        actor_id = identity.actor_id,
        "Dropshipper created",
    );

    Ok((StatusCode::CREATED, ok_entity("dropshipper", &dropshipper)))
}

/// PUT /api/admin/dropshippers/{id}
pub async fn update_dropshipper(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDropshipper>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::Edit).await?;

    let updated = DropshipperRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dropshipper",
            id,
        }))?;

    tracing::info!(dropshipper_id = id, actor_id = identity.actor_id, "Dropshipper updated");

    Ok(ok_entity("dropshipper", &updated))
}

/// DELETE /api/admin/dropshippers/{id}
pub async fn delete_dropshipper(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::Delete).await?;

    let deleted = DropshipperRepo::soft_delete(&state.pool, id, &deleter_of(&identity)).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Dropshipper",
            id,
        }));
    }

    tracing::info!(dropshipper_id = id, actor_id = identity.actor_id, "Dropshipper deleted");

    Ok(ok_message("Dropshipper deleted successfully"))
}

/// POST /api/admin/dropshippers/{id}/restore
pub async fn restore_dropshipper(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::Restore).await?;

    if !DropshipperRepo::restore(&state.pool, id).await? {
        DropshipperRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Dropshipper",
                id,
            }))?;
    }

    tracing::info!(dropshipper_id = id, actor_id = identity.actor_id, "Dropshipper restored");

    Ok(ok_message("Dropshipper restored successfully"))
}

/// POST /api/admin/dropshippers/bulk-delete
pub async fn bulk_delete_dropshippers(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::DROPSHIPPERS, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome =
        DropshipperRepo::bulk_soft_delete(&state.pool, &input.ids, &deleter_of(&identity)).await?;

    tracing::info!(
        actor_id = identity.actor_id,
        deleted = outcome.deleted.len(),
        skipped = outcome.not_deleted.len(),
        "Dropshippers bulk-deleted",
    );

    Ok(ok_outcome(&outcome))
}

/// POST /api/admin/dropshippers/permanent-delete
pub async fn permanent_delete_dropshippers(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(
        &state.pool,
        &identity,
        modules::DROPSHIPPERS,
        Action::PermanentDelete,
    )
    .await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = DropshipperRepo::bulk_hard_delete(&state.pool, &input.ids).await?;

    tracing::info!(
        actor_id = identity.actor_id,
        purged = outcome.deleted.len(),
        skipped = outcome.not_deleted.len(),
        "Dropshippers permanently deleted",
    );

    Ok(ok_outcome(&outcome))
}
