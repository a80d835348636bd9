//! Aggregates for the analytics view.

use std::collections::{HashMap, HashSet};

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use summit_db::models::idea::IdeaWithVotes;

use super::ideas::ideas_with_votes;
use crate::error::AppResult;
use crate::state::AppState;

/// How many ideas the top list holds.
const TOP_IDEAS: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub key: String,
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_ideas: usize,
    pub total_votes: i64,
    /// Distinct sessions holding at least one vote.
    pub total_participants: usize,
    pub ideas_by_category: Vec<CategoryCount>,
    /// Ideas outside the active categories.
    pub unassigned: usize,
    pub top_ideas: Vec<IdeaWithVotes>,
}

/// GET /api/statistics
pub async fn get_statistics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ideas = ideas_with_votes(state.store.as_ref()).await?;
    let votes = state.store.list_votes(None).await?;
    let categories: Vec<_> = state
        .store
        .list_kanban_categories()
        .await?
        .into_iter()
        .filter(|c| c.is_active)
        .collect();

    let mut per_key: HashMap<&str, usize> = HashMap::new();
    for idea in &ideas {
        *per_key.entry(idea.idea.idea_type.as_str()).or_default() += 1;
    }
    let ideas_by_category: Vec<CategoryCount> = categories
        .iter()
        .map(|c| CategoryCount {
            key: c.key.clone(),
            title: c.title.clone(),
            count: per_key.get(c.key.as_str()).copied().unwrap_or(0),
        })
        .collect();
    let assigned: usize = ideas_by_category.iter().map(|c| c.count).sum();

    let participants: HashSet<&str> = votes.iter().map(|v| v.session_id.as_str()).collect();

    // `ideas` is newest first; the stable sort keeps that order among ties.
    let mut top_ideas: Vec<IdeaWithVotes> =
        ideas.iter().filter(|i| i.total_votes > 0).cloned().collect();
    top_ideas.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));
    top_ideas.truncate(TOP_IDEAS);

    Ok(Json(Statistics {
        total_ideas: ideas.len(),
        total_votes: votes.iter().map(|v| i64::from(v.vote_count)).sum(),
        total_participants: participants.len(),
        unassigned: ideas.len() - assigned,
        ideas_by_category,
        top_ideas,
    }))
}
