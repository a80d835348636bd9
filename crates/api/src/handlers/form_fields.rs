//! Handlers for form field administration and the public form descriptors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use summit_core::error::CoreError;
use summit_core::form::FieldKind;
use summit_core::naming::{validate_label, validate_slug};
use summit_core::types::DbId;
use summit_db::models::form_field::{CreateFormField, UpdateFormField};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::ActiveOnlyParams;
use crate::state::AppState;
use crate::submission::load_form_schema;

/// GET /api/form-fields
pub async fn list_fields(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ActiveOnlyParams>,
) -> AppResult<impl IntoResponse> {
    let fields: Vec<_> = state
        .store
        .list_form_fields()
        .await?
        .into_iter()
        .filter(|f| !params.active_only || f.is_active)
        .collect();
    Ok(Json(fields))
}

/// GET /api/form-fields/descriptors
///
/// The active form in display order, list fields with their active options.
pub async fn list_descriptors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let schema = load_form_schema(state.store.as_ref()).await?;
    Ok(Json(schema.fields().to_vec()))
}

/// POST /api/form-fields
pub async fn create_field(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFormField>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_slug("name", &input.name)?;
    validate_label("label", &input.label)?;
    FieldKind::from_str(&input.field_type)?;

    let field = state.store.create_form_field(&input).await?;

    tracing::info!(
        field_id = field.id,
        name = %field.name,
        field_type = %field.field_type,
        "Form field created",
    );

    Ok((StatusCode::CREATED, Json(field)))
}

/// GET /api/form-fields/{id}
pub async fn get_field(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let field = state
        .store
        .find_form_field(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FormField",
            id,
        }))?;
    Ok(Json(field))
}

/// PUT /api/form-fields/{id}
pub async fn update_field(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateFormField>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(name) = &input.name {
        validate_slug("name", name)?;
    }
    if let Some(label) = &input.label {
        validate_label("label", label)?;
    }
    if let Some(field_type) = &input.field_type {
        FieldKind::from_str(field_type)?;
    }

    let field = state
        .store
        .update_form_field(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FormField",
            id,
        }))?;

    tracing::info!(field_id = id, is_active = field.is_active, "Form field updated");

    Ok(Json(field))
}

/// DELETE /api/form-fields/{id}
///
/// Deletes the field's options too. Values already stored on ideas stay.
pub async fn delete_field(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_form_field(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FormField",
            id,
        }));
    }

    tracing::info!(field_id = id, "Form field deleted");

    Ok(StatusCode::NO_CONTENT)
}
