//! Handlers for the `/summit-resources` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use summit_core::error::CoreError;
use summit_core::naming::validate_label;
use summit_core::types::DbId;
use summit_db::models::summit_resource::{CreateSummitResource, UpdateSummitResource};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/summit-resources
pub async fn list_resources(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let resources = state.store.list_summit_resources().await?;
    Ok(Json(resources))
}

/// POST /api/summit-resources
pub async fn create_resource(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSummitResource>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_label("title", &input.title)?;
    let resource = state.store.create_summit_resource(&input).await?;

    tracing::info!(resource_id = resource.id, title = %resource.title, "Summit resource created");

    Ok((StatusCode::CREATED, Json(resource)))
}

/// GET /api/summit-resources/{id}
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resource = state
        .store
        .find_summit_resource(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SummitResource",
            id,
        }))?;
    Ok(Json(resource))
}

/// PUT /api/summit-resources/{id}
///
/// Partial update: omitted fields keep their values.
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateSummitResource>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(title) = &input.title {
        validate_label("title", title)?;
    }
    let resource = state
        .store
        .update_summit_resource(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SummitResource",
            id,
        }))?;

    tracing::info!(resource_id = id, "Summit resource updated");

    Ok(Json(resource))
}

/// DELETE /api/summit-resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_summit_resource(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SummitResource",
            id,
        }));
    }

    tracing::info!(resource_id = id, "Summit resource deleted");

    Ok(StatusCode::NO_CONTENT)
}
