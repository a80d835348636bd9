//! Identifier and display-value rules shared by form fields, list options
//! and kanban categories.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum length of a machine key (field name, option value, category key).
pub const MAX_KEY_LENGTH: usize = 64;

/// Maximum length of a human-facing label or title.
pub const MAX_LABEL_LENGTH: usize = 200;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid regex"));

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"));

/// Validate a machine key: lowercase ASCII letters, digits, `_` and `-`,
/// starting with a letter or digit.
pub fn validate_slug(what: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() || value.len() > MAX_KEY_LENGTH {
        return Err(CoreError::Validation(format!(
            "{what} must be between 1 and {MAX_KEY_LENGTH} characters"
        )));
    }
    if !SLUG_RE.is_match(value) {
        return Err(CoreError::Validation(format!(
            "{what} '{value}' may only contain lowercase letters, digits, '_' and '-'"
        )));
    }
    Ok(())
}

/// Validate a non-blank label of bounded length.
pub fn validate_label(what: &str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{what} must not be empty")));
    }
    if trimmed.chars().count() > MAX_LABEL_LENGTH {
        return Err(CoreError::Validation(format!(
            "{what} must be at most {MAX_LABEL_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a `#rrggbb` color.
pub fn validate_hex_color(what: &str, value: &str) -> Result<(), CoreError> {
    if HEX_COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{what} must be a hex color like #1a2b3c, got '{value}'"
        )))
    }
}

/// Derive a machine key from free text entered by a user.
///
/// Lowercases, maps runs of non-alphanumerics to a single `_` and trims
/// leading/trailing underscores. Returns `None` when nothing usable is left.
pub fn slugify(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out.truncate(MAX_KEY_LENGTH);
    let out = out.trim_end_matches('_').to_string();
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_snake_case() {
        assert!(validate_slug("name", "submitter_name").is_ok());
        assert!(validate_slug("key", "ai-idea-2").is_ok());
    }

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert!(validate_slug("name", "Submitter").is_err());
        assert!(validate_slug("name", "has space").is_err());
        assert!(validate_slug("name", "_leading").is_err());
        assert!(validate_slug("name", "").is_err());
    }

    #[test]
    fn label_rejects_blank() {
        assert!(validate_label("label", "   ").is_err());
        assert!(validate_label("label", "Idea title").is_ok());
    }

    #[test]
    fn hex_color_shape() {
        assert!(validate_hex_color("color", "#A1b2C3").is_ok());
        assert!(validate_hex_color("color", "red").is_err());
        assert!(validate_hex_color("color", "#abc").is_err());
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Data  Platform!"), Some("data_platform".to_string()));
        assert_eq!(slugify("  --  "), None);
        assert_eq!(slugify("ML/Ops"), Some("ml_ops".to_string()));
    }
}
