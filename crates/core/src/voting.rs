//! Vote budget rules.
//!
//! Each participant session holds a budget of votes it may spread across
//! ideas. These functions decide what a single vote or unvote does; the
//! caller applies the resulting [`VoteChange`] to storage.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default per-session vote budget.
pub const DEFAULT_MAX_VOTES_PER_PARTICIPANT: i32 = 5;

/// Maximum accepted session id length.
pub const MAX_SESSION_ID_LENGTH: usize = 128;

/// The global voting switch and budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotePolicy {
    pub enabled: bool,
    pub max_votes_per_participant: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Increment,
    Decrement,
}

impl VoteDirection {
    pub fn from_increment(increment: bool) -> Self {
        if increment {
            Self::Increment
        } else {
            Self::Decrement
        }
    }
}

/// What storage must do with the (idea, session) vote row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChange {
    /// Create or overwrite the row with this count (always >= 1).
    Upsert(i32),
    /// Delete the row; the count reached zero.
    Remove,
}

/// Votes a session may still cast. Never negative, even if the budget was
/// lowered below what the session already spent.
pub fn remaining_votes(max_votes_per_participant: i32, used: i32) -> i32 {
    (max_votes_per_participant - used).max(0)
}

/// Decide the effect of one vote or unvote.
///
/// `current` is the session's count on this idea (0 when no row exists) and
/// `used` the session's total across all ideas.
pub fn plan_vote(
    policy: VotePolicy,
    current: i32,
    used: i32,
    direction: VoteDirection,
) -> Result<VoteChange, CoreError> {
    if !policy.enabled {
        return Err(CoreError::Rejected("Voting is closed".to_string()));
    }

    let next = match direction {
        VoteDirection::Increment => {
            if remaining_votes(policy.max_votes_per_participant, used) <= 0 {
                return Err(CoreError::Rejected(format!(
                    "No votes remaining (limit is {})",
                    policy.max_votes_per_participant
                )));
            }
            current + 1
        }
        VoteDirection::Decrement => {
            if current <= 0 {
                return Err(CoreError::Rejected(
                    "No vote on this idea to remove".to_string(),
                ));
            }
            current - 1
        }
    };

    Ok(if next == 0 {
        VoteChange::Remove
    } else {
        VoteChange::Upsert(next)
    })
}

/// Validate a client-generated session identifier.
pub fn validate_session_id(session_id: &str) -> Result<(), CoreError> {
    let trimmed = session_id.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("sessionId must not be empty".to_string()));
    }
    if trimmed.len() != session_id.len() || session_id.len() > MAX_SESSION_ID_LENGTH {
        return Err(CoreError::Validation(format!(
            "sessionId must be at most {MAX_SESSION_ID_LENGTH} characters without surrounding whitespace"
        )));
    }
    Ok(())
}

/// Validate an administrator-supplied vote budget.
pub fn validate_max_votes(max_votes_per_participant: i32) -> Result<(), CoreError> {
    if max_votes_per_participant < 0 {
        return Err(CoreError::Validation(
            "maxVotesPerParticipant must not be negative".to_string(),
        ));
    }
    Ok(())
}
