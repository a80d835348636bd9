//! Idea models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::kanban::Categorized;
use summit_core::types::{DbId, Timestamp};
use validator::Validate;

use super::idea_dynamic_field::IdeaDynamicField;

/// A row from the `ideas` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: DbId,
    /// Name of the submitter.
    pub name: String,
    pub title: String,
    pub description: String,
    pub component: Option<String>,
    pub tag: Option<String>,
    /// Kanban category key.
    #[serde(rename = "type")]
    pub idea_type: String,
    pub created_at: Timestamp,
}

impl Categorized for Idea {
    fn category_key(&self) -> &str {
        &self.idea_type
    }
}

/// An idea with its aggregate vote count, as listed to attendees.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaWithVotes {
    #[serde(flatten)]
    pub idea: Idea,
    pub total_votes: i64,
}

impl Categorized for IdeaWithVotes {
    fn category_key(&self) -> &str {
        &self.idea.idea_type
    }
}

/// A single idea with votes and its dynamic attributes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDetail {
    #[serde(flatten)]
    pub idea: Idea,
    pub total_votes: i64,
    pub dynamic_fields: Vec<IdeaDynamicField>,
}

/// DTO for creating an idea.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdea {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
    #[validate(length(max = 200))]
    pub component: Option<String>,
    #[validate(length(max = 200))]
    pub tag: Option<String>,
    #[serde(rename = "type", default)]
    pub idea_type: String,
}

/// Payload for moving an idea to another kanban category.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveIdea {
    pub category: String,
}

/// Payload for deleting several ideas at once.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDeleteIdeas {
    pub ids: Vec<DbId>,
}
