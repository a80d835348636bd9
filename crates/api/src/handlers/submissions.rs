//! Handlers for form submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;
use crate::submission;

/// POST /api/submissions
///
/// The body maps active form field names to values. Returns 201 with the
/// created idea, its dynamic values and any list options the submitter added.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let outcome = submission::submit(state.store.as_ref(), &payload).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// POST /api/submissions/validate
///
/// Same checks as a submission, without writing.
pub async fn validate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let report = submission::dry_run(state.store.as_ref(), &payload).await?;
    Ok(Json(report))
}
