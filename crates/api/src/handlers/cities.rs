//! Admin-portal handlers for city management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::models::city::{CreateCity, UpdateCity};
use backoffice_db::repositories::{CityRepo, StateRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::AdminPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, CityListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/admin/cities (optionally `?state_id=`)
pub async fn list_cities(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Query(params): Query<CityListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::View).await?;

    let cities = CityRepo::list(
        &state.pool,
        params.state_id,
        params.status.unwrap_or_default(),
    )
    .await?;
    Ok(ok_entity("cities", &cities))
}

/// POST /api/admin/cities
pub async fn create_city(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    // The parent state must exist and be live.
    StateRepo::find_by_id(&state.pool, input.state_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "State",
            id: input.state_id,
        }))?;

    let city = CityRepo::create(&state.pool, &input).await?;

    tracing::info!(city_id = city.id, actor_id = identity.actor_id, "City created");

    Ok((StatusCode::CREATED, ok_entity("city", &city)))
}

/// PUT /api/admin/cities/{id}
pub async fn update_city(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCity>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::Edit).await?;

    let updated = CityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;

    Ok(ok_entity("city", &updated))
}

/// DELETE /api/admin/cities/{id}
pub async fn delete_city(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::Delete).await?;

    if !CityRepo::soft_delete(&state.pool, id, &deleter_of(&identity)).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "City", id }));
    }

    tracing::info!(city_id = id, actor_id = identity.actor_id, "City deleted");

    Ok(ok_message("City deleted successfully"))
}

/// POST /api/admin/cities/{id}/restore
pub async fn restore_city(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::Restore).await?;

    if !CityRepo::restore(&state.pool, id).await? {
        CityRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    }

    Ok(ok_message("City restored successfully"))
}

/// POST /api/admin/cities/bulk-delete
pub async fn bulk_delete_cities(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome =
        CityRepo::bulk_soft_delete(&state.pool, &input.ids, &deleter_of(&identity)).await?;
    Ok(ok_outcome(&outcome))
}

/// POST /api/admin/cities/permanent-delete
pub async fn permanent_delete_cities(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::CITIES, Action::PermanentDelete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = CityRepo::bulk_hard_delete(&state.pool, &input.ids).await?;
    Ok(ok_outcome(&outcome))
}
