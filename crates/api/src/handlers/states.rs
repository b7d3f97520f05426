//! Admin-portal handlers for state (region) management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::models::state::{CreateState, UpdateState};
use backoffice_db::repositories::StateRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::AdminPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, ListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/admin/states
pub async fn list_states(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::View).await?;

    let states = StateRepo::list(&state.pool, params.status.unwrap_or_default()).await?;
    Ok(ok_entity("states", &states))
}

/// POST /api/admin/states
pub async fn create_state(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateState>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let created = StateRepo::create(&state.pool, &input).await?;

    tracing::info!(state_id = created.id, actor_id = identity.actor_id, "State created");

    Ok((StatusCode::CREATED, ok_entity("state", &created)))
}

/// PUT /api/admin/states/{id}
pub async fn update_state(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateState>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::Edit).await?;

    let updated = StateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "State", id }))?;

    Ok(ok_entity("state", &updated))
}

/// DELETE /api/admin/states/{id}
pub async fn delete_state(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::Delete).await?;

    if !StateRepo::soft_delete(&state.pool, id, &deleter_of(&identity)).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "State", id }));
    }

    tracing::info!(state_id = id, actor_id = identity.actor_id, "State deleted");

    Ok(ok_message("State deleted successfully"))
}

/// POST /api/admin/states/{id}/restore
pub async fn restore_state(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::Restore).await?;

    if !StateRepo::restore(&state.pool, id).await? {
        StateRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "State", id }))?;
    }

    Ok(ok_message("State restored successfully"))
}

/// POST /api/admin/states/bulk-delete
pub async fn bulk_delete_states(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome =
        StateRepo::bulk_soft_delete(&state.pool, &input.ids, &deleter_of(&identity)).await?;
    Ok(ok_outcome(&outcome))
}

/// POST /api/admin/states/permanent-delete
pub async fn permanent_delete_states(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STATES, Action::PermanentDelete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = StateRepo::bulk_hard_delete(&state.pool, &input.ids).await?;
    Ok(ok_outcome(&outcome))
}
