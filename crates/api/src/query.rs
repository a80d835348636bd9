//! Shared query parameter types for API handlers.
//!
//! Parameter names are camelCase on the wire (`?activeOnly=true`).

use serde::Deserialize;
use summit_core::types::DbId;

/// `?activeOnly=` for form field listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOnlyParams {
    #[serde(default)]
    pub active_only: bool,
}

/// `?fieldId=` for option listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilterParams {
    pub field_id: Option<DbId>,
}

/// `?ideaId=` for dynamic field listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFilterParams {
    pub idea_id: Option<DbId>,
}

/// `?sessionId=` for vote endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParams {
    pub session_id: Option<String>,
}
