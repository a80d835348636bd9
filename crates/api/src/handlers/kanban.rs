//! Handlers for kanban categories, the board view and reconciliation.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use summit_core::error::CoreError;
use summit_core::kanban::partition_by_category;
use summit_core::naming::{validate_hex_color, validate_label, validate_slug};
use summit_core::types::DbId;
use summit_db::models::idea::IdeaWithVotes;
use summit_db::models::kanban_category::{
    CreateKanbanCategory, KanbanCategory, UpdateKanbanCategory,
};
use validator::Validate;

use super::ideas::ideas_with_votes;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/kanban-categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.list_kanban_categories().await?))
}

/// POST /api/kanban-categories
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateKanbanCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_slug("key", &input.key)?;
    validate_label("title", &input.title)?;
    if let Some(color) = &input.color {
        validate_hex_color("color", color)?;
    }

    let category = state.store.create_kanban_category(&input).await?;

    tracing::info!(category_id = category.id, key = %category.key, "Kanban category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/kanban-categories/{id}
///
/// The key is immutable; ideas reference categories by key.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateKanbanCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(title) = &input.title {
        validate_label("title", title)?;
    }
    if let Some(color) = &input.color {
        validate_hex_color("color", color)?;
    }

    let category = state
        .store
        .update_kanban_category(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "KanbanCategory",
            id,
        }))?;

    tracing::info!(category_id = id, is_active = category.is_active, "Kanban category updated");

    Ok(Json(category))
}

/// DELETE /api/kanban-categories/{id}
///
/// Ideas keep their key and show up as unassigned on the board.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_kanban_category(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "KanbanCategory",
            id,
        }));
    }

    tracing::info!(category_id = id, "Kanban category deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BoardColumn {
    pub category: KanbanCategory,
    pub ideas: Vec<IdeaWithVotes>,
}

#[derive(Debug, Serialize)]
pub struct BoardView {
    pub columns: Vec<BoardColumn>,
    /// Ideas whose category key is not an active category.
    pub unassigned: Vec<IdeaWithVotes>,
}

/// GET /api/kanban/board
pub async fn get_board(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories: Vec<KanbanCategory> = state
        .store
        .list_kanban_categories()
        .await?
        .into_iter()
        .filter(|c| c.is_active)
        .collect();
    let keys: Vec<String> = categories.iter().map(|c| c.key.clone()).collect();
    let ideas = ideas_with_votes(state.store.as_ref()).await?;

    let partition = partition_by_category(&keys, &ideas);
    let columns = categories
        .into_iter()
        .zip(partition.columns)
        .map(|(category, (_, ideas))| BoardColumn {
            category,
            ideas: ideas.into_iter().cloned().collect(),
        })
        .collect();

    Ok(Json(BoardView {
        columns,
        unassigned: partition.unassigned.into_iter().cloned().collect(),
    }))
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    /// Old key -> active key.
    #[serde(default)]
    pub renames: HashMap<String, String>,
    /// Target for any other inactive key.
    pub fallback: Option<String>,
}

/// POST /api/kanban/reconcile
pub async fn reconcile(
    State(state): State<AppState>,
    AppJson(input): AppJson<ReconcileRequest>,
) -> AppResult<impl IntoResponse> {
    let report = state
        .kanban
        .reconcile(&input.renames, input.fallback.as_deref())
        .await?;
    Ok(Json(report))
}
