//! Form field and list option models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::types::{DbId, Timestamp};
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `form_fields` table.
///
/// `field_type` is kept as text here; it is parsed into
/// [`summit_core::form::FieldKind`] when the form is loaded.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: DbId,
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub required: bool,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub allow_user_additions: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `form_field_options` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldOption {
    pub id: DbId,
    pub field_id: DbId,
    pub value: String,
    pub label: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a form field.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormField {
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub label: String,
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[validate(length(max = 200))]
    pub placeholder: Option<String>,
    #[validate(length(max = 1000))]
    pub help_text: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub allow_user_additions: Option<bool>,
}

/// DTO for partially updating a form field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormField {
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub label: Option<String>,
    pub field_type: Option<String>,
    pub required: Option<bool>,
    #[validate(length(max = 200))]
    pub placeholder: Option<String>,
    #[validate(length(max = 1000))]
    pub help_text: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub allow_user_additions: Option<bool>,
}

/// DTO for creating a list option.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormFieldOption {
    pub field_id: DbId,
    pub value: String,
    #[validate(length(min = 1, max = 200))]
    pub label: String,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a list option.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormFieldOption {
    pub value: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub label: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
