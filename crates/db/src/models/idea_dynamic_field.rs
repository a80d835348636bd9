//! Values of non-core form fields attached to an idea.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `idea_dynamic_fields` table.
///
/// `field_id` is not a foreign key: deleting a form field leaves its values
/// behind.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDynamicField {
    pub id: DbId,
    pub idea_id: DbId,
    pub field_id: DbId,
    pub value: String,
    pub created_at: Timestamp,
}

/// DTO for attaching a dynamic value to an idea.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaDynamicField {
    pub idea_id: DbId,
    pub field_id: DbId,
    #[validate(length(min = 1, max = 10000))]
    pub value: String,
}
