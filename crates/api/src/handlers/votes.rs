//! Handlers for the vote ledger.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use summit_db::models::setting::VotingSettings;
use summit_db::models::vote::CastVote;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::SessionParams;
use crate::state::AppState;

/// GET /api/votes
pub async fn list_votes(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SessionParams>,
) -> AppResult<impl IntoResponse> {
    let votes = state.store.list_votes(params.session_id.as_deref()).await?;
    Ok(Json(votes))
}

/// POST /api/votes
///
/// `increment: true` adds one vote, `false` withdraws one. Business-rule
/// refusals (voting closed, budget spent, nothing to withdraw) are 409.
pub async fn cast_vote(
    State(state): State<AppState>,
    AppJson(input): AppJson<CastVote>,
) -> AppResult<impl IntoResponse> {
    let policy = state.settings.get::<VotingSettings>().await.policy();
    let receipt = state.votes.cast(policy, &input).await?;
    Ok(Json(receipt))
}

/// GET /api/votes/remaining?sessionId=
pub async fn remaining_votes(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SessionParams>,
) -> AppResult<impl IntoResponse> {
    let session_id = params
        .session_id
        .ok_or_else(|| AppError::BadRequest("sessionId is required".into()))?;
    let policy = state.settings.get::<VotingSettings>().await.policy();
    Ok(Json(state.votes.remaining(policy, &session_id).await?))
}

/// GET /api/votes/totals
pub async fn vote_totals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.vote_totals().await?))
}
