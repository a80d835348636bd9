//! Single-record configuration: voting, header, views, landing page and the
//! home page content.
//!
//! Each record is stored as one JSON document keyed by
//! [`SettingsRecord::KEY`] in the `app_settings` table. Missing records and
//! missing keys fall back to the defaults below.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use summit_core::error::CoreError;
use summit_core::naming::validate_hex_color;
use summit_core::types::Timestamp;
use summit_core::voting::{validate_max_votes, VotePolicy, DEFAULT_MAX_VOTES_PER_PARTICIPANT};

/// A typed settings document.
pub trait SettingsRecord: Serialize + DeserializeOwned + Default + Clone + Send + Sync {
    /// Storage key of the record.
    const KEY: &'static str;

    /// Check cross-field rules after deserialization.
    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// A row from the `app_settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct SettingRow {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Voting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VotingSettings {
    pub voting_enabled: bool,
    pub max_votes_per_participant: i32,
}

impl Default for VotingSettings {
    fn default() -> Self {
        Self {
            voting_enabled: true,
            max_votes_per_participant: DEFAULT_MAX_VOTES_PER_PARTICIPANT,
        }
    }
}

impl VotingSettings {
    pub fn policy(&self) -> VotePolicy {
        VotePolicy {
            enabled: self.voting_enabled,
            max_votes_per_participant: self.max_votes_per_participant,
        }
    }
}

impl SettingsRecord for VotingSettings {
    const KEY: &'static str = "voting";

    fn validate(&self) -> Result<(), CoreError> {
        validate_max_votes(self.max_votes_per_participant)
    }
}

// ---------------------------------------------------------------------------
// Header branding
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderSettings {
    pub title: String,
    pub subtitle: Option<String>,
    pub logo_url: Option<String>,
    pub background_color: String,
    pub text_color: String,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            title: "Innovation Summit".to_string(),
            subtitle: Some("Share and vote on ideas".to_string()),
            logo_url: None,
            background_color: "#1f2937".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

impl SettingsRecord for HeaderSettings {
    const KEY: &'static str = "header";

    fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".to_string()));
        }
        validate_hex_color("backgroundColor", &self.background_color)?;
        validate_hex_color("textColor", &self.text_color)
    }
}

// ---------------------------------------------------------------------------
// View toggles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    List,
    Kanban,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewSettings {
    pub show_kanban: bool,
    pub show_analytics: bool,
    pub show_resources: bool,
    pub default_view: DefaultView,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_kanban: true,
            show_analytics: true,
            show_resources: true,
            default_view: DefaultView::List,
        }
    }
}

impl SettingsRecord for ViewSettings {
    const KEY: &'static str = "view";

    fn validate(&self) -> Result<(), CoreError> {
        if self.default_view == DefaultView::Kanban && !self.show_kanban {
            return Err(CoreError::Validation(
                "defaultView cannot be kanban while showKanban is off".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// Which page attendees land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingPageMode {
    Home,
    Submit,
    Vote,
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingPageSettings {
    pub mode: LandingPageMode,
    pub welcome_message: Option<String>,
    pub countdown_target: Option<Timestamp>,
}

impl Default for LandingPageSettings {
    fn default() -> Self {
        Self {
            mode: LandingPageMode::Home,
            welcome_message: None,
            countdown_target: None,
        }
    }
}

impl SettingsRecord for LandingPageSettings {
    const KEY: &'static str = "landing_page";
}

// ---------------------------------------------------------------------------
// Home page content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummitHomeContent {
    pub title: String,
    /// Rich text, stored and served as-is.
    pub content: String,
}

impl Default for SummitHomeContent {
    fn default() -> Self {
        Self {
            title: "Welcome to the Summit".to_string(),
            content: String::new(),
        }
    }
}

impl SettingsRecord for SummitHomeContent {
    const KEY: &'static str = "home_content";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_keys_take_defaults() {
        let v: VotingSettings = serde_json::from_value(json!({"votingEnabled": false})).unwrap();
        assert!(!v.voting_enabled);
        assert_eq!(v.max_votes_per_participant, DEFAULT_MAX_VOTES_PER_PARTICIPANT);
    }

    #[test]
    fn negative_budget_is_invalid() {
        let v = VotingSettings {
            voting_enabled: true,
            max_votes_per_participant: -1,
        };
        assert!(v.validate().is_err());
    }

    #[test]
    fn header_colors_are_checked() {
        let mut h = HeaderSettings::default();
        assert!(h.validate().is_ok());
        h.text_color = "white".to_string();
        assert!(h.validate().is_err());
    }

    #[test]
    fn kanban_default_view_requires_kanban() {
        let v = ViewSettings {
            show_kanban: false,
            default_view: DefaultView::Kanban,
            ..ViewSettings::default()
        };
        assert!(v.validate().is_err());
    }

    #[test]
    fn landing_mode_uses_lowercase() {
        let s: LandingPageSettings = serde_json::from_value(json!({"mode": "vote"})).unwrap();
        assert_eq!(s.mode, LandingPageMode::Vote);
    }
}
