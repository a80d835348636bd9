//! Kanban category models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `kanban_categories` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCategory {
    pub id: DbId,
    /// Stable key stored in `ideas.idea_type`.
    pub key: String,
    pub title: String,
    pub color: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateKanbanCategory {
    pub key: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub color: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a category. The key is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKanbanCategory {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub color: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
