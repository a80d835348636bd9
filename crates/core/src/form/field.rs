//! Field kinds and descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::naming::slugify;
use crate::types::DbId;

/// Per-kind validation routine. Receives a value already known to be
/// non-empty and returns its canonical form or a user-facing message.
pub type FieldCheck = fn(&FieldDescriptor, &Value) -> Result<FieldValue, String>;

/// Longest accepted `text` value, in characters after trimming.
pub const MAX_TEXT_LENGTH: usize = 200;

/// Longest accepted `textarea` value, in characters after trimming.
pub const MAX_TEXTAREA_LENGTH: usize = 10_000;

/// The closed set of input kinds a form field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Email,
    List,
}

/// All valid field kind strings.
const VALID_KIND_STRINGS: &[&str] = &["text", "textarea", "number", "email", "list"];

impl FieldKind {
    /// Return the kind as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Email => "email",
            Self::List => "list",
        }
    }

    /// Parse a kind from its stored string form.
    ///
    /// Unknown kinds are an error; there is no fallback kind.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "number" => Ok(Self::Number),
            "email" => Ok(Self::Email),
            "list" => Ok(Self::List),
            _ => Err(CoreError::Validation(format!(
                "Invalid field type '{s}'. Must be one of: {}",
                VALID_KIND_STRINGS.join(", ")
            ))),
        }
    }

    /// The validation routine for this kind.
    pub fn check(&self) -> FieldCheck {
        match self {
            Self::Text => check_text,
            Self::Textarea => check_textarea,
            Self::Number => check_number,
            Self::Email => check_email,
            Self::List => check_list,
        }
    }
}

/// One selectable value of a list field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub value: String,
    pub label: String,
}

/// A validated, active form field as the submission form sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: DbId,
    pub name: String,
    pub label: String,
    #[serde(rename = "fieldType")]
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub display_order: i32,
    pub allow_user_additions: bool,
    /// Active options in display order. Always empty for non-list kinds.
    pub options: Vec<OptionDescriptor>,
}

impl FieldDescriptor {
    fn find_option(&self, value: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// The canonical value of a field after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// A list selection. `new_label` is set when the user introduced a
    /// value the field did not offer yet.
    Choice {
        value: String,
        new_label: Option<String>,
    },
}

impl FieldValue {
    /// Render the value as it is stored in text columns.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Choice { value, .. } => value.clone(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn expect_string<'a>(field: &FieldDescriptor, value: &'a Value) -> Result<&'a str, String> {
    value
        .as_str()
        .map(str::trim)
        .ok_or_else(|| format!("{} must be a string", field.label))
}

fn check_text(field: &FieldDescriptor, value: &Value) -> Result<FieldValue, String> {
    bounded_text(field, value, MAX_TEXT_LENGTH)
}

fn check_textarea(field: &FieldDescriptor, value: &Value) -> Result<FieldValue, String> {
    bounded_text(field, value, MAX_TEXTAREA_LENGTH)
}

fn bounded_text(field: &FieldDescriptor, value: &Value, max: usize) -> Result<FieldValue, String> {
    let text = expect_string(field, value)?;
    if text.chars().count() > max {
        return Err(format!("{} must be at most {max} characters", field.label));
    }
    Ok(FieldValue::Text(text.to_string()))
}

fn check_number(field: &FieldDescriptor, value: &Value) -> Result<FieldValue, String> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Ok(FieldValue::Number(n)),
        _ => Err(format!("{} must be a number", field.label)),
    }
}

fn check_email(field: &FieldDescriptor, value: &Value) -> Result<FieldValue, String> {
    let email = expect_string(field, value)?.to_string();
    if email.validate_email() {
        Ok(FieldValue::Text(email))
    } else {
        Err(format!("{} must be a valid email address", field.label))
    }
}

fn check_list(field: &FieldDescriptor, value: &Value) -> Result<FieldValue, String> {
    let raw = expect_string(field, value)?;

    if field.find_option(raw).is_some() {
        return Ok(FieldValue::Choice {
            value: raw.to_string(),
            new_label: None,
        });
    }

    if !field.allow_user_additions {
        let allowed: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
        return Err(format!(
            "{} must be one of: {}",
            field.label,
            allowed.join(", ")
        ));
    }

    let key = slugify(raw)
        .ok_or_else(|| format!("{} must contain letters or digits", field.label))?;
    let new_label = if field.find_option(&key).is_some() {
        None
    } else {
        Some(raw.to_string())
    };
    Ok(FieldValue::Choice {
        value: key,
        new_label,
    })
}
