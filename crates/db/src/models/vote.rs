//! Vote models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::types::{DbId, Timestamp};

/// A row from the `votes` table. `vote_count` is always at least 1.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: DbId,
    pub idea_id: DbId,
    pub session_id: String,
    pub vote_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Sum of all sessions' votes on one idea.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaVoteTotal {
    pub idea_id: DbId,
    pub total_votes: i64,
}

/// DTO for casting or withdrawing one vote.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVote {
    pub idea_id: DbId,
    pub session_id: String,
    /// `true` adds a vote, `false` removes one.
    pub increment: bool,
}
