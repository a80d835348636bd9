//! Summit resource link models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `summit_resources` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummitResource {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a resource link.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSummitResource {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(url)]
    pub url: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// DTO for partially updating a resource link.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummitResource {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}
