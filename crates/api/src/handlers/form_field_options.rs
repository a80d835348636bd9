//! Handlers for list field options.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use summit_core::error::CoreError;
use summit_core::form::FieldKind;
use summit_core::naming::{validate_label, validate_slug};
use summit_core::types::DbId;
use summit_db::models::form_field::{CreateFormFieldOption, UpdateFormFieldOption};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::FieldFilterParams;
use crate::state::AppState;

/// GET /api/form-field-options
pub async fn list_options(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FieldFilterParams>,
) -> AppResult<impl IntoResponse> {
    let options = state.store.list_form_field_options(params.field_id).await?;
    Ok(Json(options))
}

/// POST /api/form-field-options
///
/// The parent field must exist and be a list field.
pub async fn create_option(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFormFieldOption>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_slug("value", &input.value)?;
    validate_label("label", &input.label)?;

    let field = state
        .store
        .find_form_field(input.field_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FormField",
            id: input.field_id,
        }))?;
    if FieldKind::from_str(&field.field_type)? != FieldKind::List {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Form field '{}' is not a list field",
            field.name
        ))));
    }

    let option = state.store.create_form_field_option(&input).await?;

    tracing::info!(
        option_id = option.id,
        field_id = option.field_id,
        value = %option.value,
        "Form field option created",
    );

    Ok((StatusCode::CREATED, Json(option)))
}

/// PUT /api/form-field-options/{id}
pub async fn update_option(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateFormFieldOption>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(value) = &input.value {
        validate_slug("value", value)?;
    }
    if let Some(label) = &input.label {
        validate_label("label", label)?;
    }

    let option = state
        .store
        .update_form_field_option(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FormFieldOption",
            id,
        }))?;

    tracing::info!(option_id = id, "Form field option updated");

    Ok(Json(option))
}

/// DELETE /api/form-field-options/{id}
pub async fn delete_option(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_form_field_option(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FormFieldOption",
            id,
        }));
    }

    tracing::info!(option_id = id, "Form field option deleted");

    Ok(StatusCode::NO_CONTENT)
}
