//! Handlers for ideas: listing with vote totals, raw creation, deletion and
//! kanban moves.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use summit_core::error::CoreError;
use summit_core::types::DbId;
use summit_db::models::idea::{BulkDeleteIdeas, CreateIdea, Idea, IdeaDetail, IdeaWithVotes, MoveIdea};
use summit_db::store::Store;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::kanban::MoveResult;
use crate::state::AppState;

/// All ideas, newest first, each with its vote total.
pub(crate) async fn ideas_with_votes(store: &dyn Store) -> AppResult<Vec<IdeaWithVotes>> {
    let totals: HashMap<DbId, i64> = store
        .vote_totals()
        .await?
        .into_iter()
        .map(|t| (t.idea_id, t.total_votes))
        .collect();

    Ok(store
        .list_ideas()
        .await?
        .into_iter()
        .map(|idea| IdeaWithVotes {
            total_votes: totals.get(&idea.id).copied().unwrap_or(0),
            idea,
        })
        .collect())
}

/// GET /api/ideas
pub async fn list_ideas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(ideas_with_votes(state.store.as_ref()).await?))
}

/// POST /api/ideas
///
/// Create an idea directly, bypassing the form engine.
pub async fn create_idea(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateIdea>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let idea = state.store.create_idea(&input).await?;

    tracing::info!(idea_id = idea.id, category = %idea.idea_type, "Idea created");

    Ok((StatusCode::CREATED, Json(idea)))
}

/// GET /api/ideas/{id}
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let idea = state
        .store
        .find_idea(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))?;

    let total_votes = state
        .store
        .vote_totals()
        .await?
        .into_iter()
        .find(|t| t.idea_id == id)
        .map_or(0, |t| t.total_votes);
    let dynamic_fields = state.store.list_idea_dynamic_fields(Some(id)).await?;

    Ok(Json(IdeaDetail {
        idea,
        total_votes,
        dynamic_fields,
    }))
}

/// DELETE /api/ideas/{id}
///
/// Removes the idea with its dynamic fields and votes.
pub async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_idea(id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Idea", id }));
    }

    tracing::info!(idea_id = id, "Idea deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub deleted: Vec<DbId>,
    pub not_found: Vec<DbId>,
}

/// POST /api/ideas/bulk-delete
pub async fn bulk_delete_ideas(
    State(state): State<AppState>,
    AppJson(input): AppJson<BulkDeleteIdeas>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let mut response = BulkDeleteResponse {
        deleted: Vec::new(),
        not_found: Vec::new(),
    };
    for id in input.ids {
        if state.store.delete_idea(id).await? {
            response.deleted.push(id);
        } else {
            response.not_found.push(id);
        }
    }

    tracing::info!(
        deleted = response.deleted.len(),
        not_found = response.not_found.len(),
        "Ideas bulk deleted",
    );

    Ok(Json(response))
}

/// Body of a move response; `status` tells which case applied.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum MoveResponse {
    Unchanged { idea: Idea },
    Moved { idea: Idea, writes: u32 },
    Coalesced { idea_id: DbId, category: String },
}

/// PUT /api/ideas/{id}/category
///
/// Returns 200 when this request persisted the move (or nothing had to
/// change) and 202 when it was folded into a move already in flight.
pub async fn move_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<MoveIdea>,
) -> AppResult<impl IntoResponse> {
    let response = match state.kanban.move_idea(id, &input.category).await? {
        MoveResult::Unchanged(idea) => (StatusCode::OK, MoveResponse::Unchanged { idea }),
        MoveResult::Moved { idea, writes } => (StatusCode::OK, MoveResponse::Moved { idea, writes }),
        MoveResult::Coalesced { idea_id, target } => (
            StatusCode::ACCEPTED,
            MoveResponse::Coalesced {
                idea_id,
                category: target,
            },
        ),
    };
    Ok((response.0, Json(response.1)))
}
