//! Handlers for dynamic idea values.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use summit_core::error::CoreError;
use summit_db::models::idea_dynamic_field::CreateIdeaDynamicField;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::IdeaFilterParams;
use crate::state::AppState;

/// GET /api/idea-dynamic-fields
pub async fn list_dynamic_fields(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IdeaFilterParams>,
) -> AppResult<impl IntoResponse> {
    let rows = state.store.list_idea_dynamic_fields(params.idea_id).await?;
    Ok(Json(rows))
}

/// POST /api/idea-dynamic-fields
pub async fn create_dynamic_field(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateIdeaDynamicField>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if input.value.trim().is_empty() {
        return Err(CoreError::Validation("value must not be empty".into()).into());
    }
    if state.store.find_idea(input.idea_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Idea",
            id: input.idea_id,
        }));
    }

    let row = state.store.create_idea_dynamic_field(&input).await?;

    tracing::info!(
        idea_id = row.idea_id,
        field_id = row.field_id,
        "Idea dynamic field created",
    );

    Ok((StatusCode::CREATED, Json(row)))
}
