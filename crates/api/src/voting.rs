//! Vote ledger: applies [`summit_core::voting`] rules against the store.
//!
//! All mutations for one session run under that session's lock, so the
//! budget check and the write cannot interleave with another request from
//! the same session.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use serde::Serialize;
use summit_core::error::CoreError;
use summit_core::types::DbId;
use summit_core::voting::{
    plan_vote, remaining_votes, validate_session_id, VoteChange, VoteDirection, VotePolicy,
};
use summit_db::models::vote::{CastVote, Vote};
use summit_db::store::Store;
use tokio::sync::Mutex;

use crate::error::AppResult;

/// State after a vote or unvote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub idea_id: DbId,
    pub session_id: String,
    /// The session's row for this idea; `None` once the count reaches zero.
    pub vote: Option<Vote>,
    pub remaining_votes: i32,
    /// Sum over all sessions for this idea.
    pub total_votes: i64,
}

/// A session's budget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingVotes {
    pub session_id: String,
    pub voting_enabled: bool,
    pub max_votes_per_participant: i32,
    pub used_votes: i32,
    pub remaining_votes: i32,
}

type SessionLocks = StdMutex<HashMap<String, Arc<Mutex<()>>>>;

pub struct VoteLedger {
    store: Arc<dyn Store>,
    sessions: SessionLocks,
}

/// A reference to one session's lock. Dropping the last one removes the
/// session's entry, including when the owning request is cancelled.
struct SessionSlot<'a> {
    sessions: &'a SessionLocks,
    session_id: &'a str,
    lock: Arc<Mutex<()>>,
}

impl Drop for SessionSlot<'_> {
    fn drop(&mut self) {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        // The map's handle plus this one.
        if sessions
            .get(self.session_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 2)
        {
            sessions.remove(self.session_id);
        }
    }
}

impl VoteLedger {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            sessions: StdMutex::new(HashMap::new()),
        }
    }

    /// Cast or withdraw one vote.
    pub async fn cast(&self, policy: VotePolicy, request: &CastVote) -> AppResult<VoteReceipt> {
        validate_session_id(&request.session_id)?;

        let slot = self.session_slot(&request.session_id);
        let _guard = slot.lock.lock().await;
        self.apply(policy, request).await
    }

    async fn apply(&self, policy: VotePolicy, request: &CastVote) -> AppResult<VoteReceipt> {
        let session_id = request.session_id.as_str();
        let current = self
            .store
            .find_vote(request.idea_id, session_id)
            .await?
            .map_or(0, |v| v.vote_count);
        let used = self.used_votes(session_id).await?;

        let change = plan_vote(
            policy,
            current,
            used,
            VoteDirection::from_increment(request.increment),
        )?;

        if self.store.find_idea(request.idea_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Idea",
                id: request.idea_id,
            }
            .into());
        }

        let vote = match change {
            VoteChange::Upsert(count) => Some(
                self.store
                    .upsert_vote(request.idea_id, session_id, count)
                    .await?,
            ),
            VoteChange::Remove => {
                self.store.delete_vote(request.idea_id, session_id).await?;
                None
            }
        };

        let used_after = self.used_votes(session_id).await?;
        let total_votes = self
            .store
            .vote_totals()
            .await?
            .into_iter()
            .find(|t| t.idea_id == request.idea_id)
            .map_or(0, |t| t.total_votes);

        tracing::info!(
            idea_id = request.idea_id,
            session_id,
            increment = request.increment,
            vote_count = vote.as_ref().map_or(0, |v| v.vote_count),
            "Vote recorded",
        );

        Ok(VoteReceipt {
            idea_id: request.idea_id,
            session_id: session_id.to_string(),
            vote,
            remaining_votes: remaining_votes(policy.max_votes_per_participant, used_after),
            total_votes,
        })
    }

    /// Budget left for a session under the given policy.
    pub async fn remaining(&self, policy: VotePolicy, session_id: &str) -> AppResult<RemainingVotes> {
        validate_session_id(session_id)?;
        let used = self.used_votes(session_id).await?;
        Ok(RemainingVotes {
            session_id: session_id.to_string(),
            voting_enabled: policy.enabled,
            max_votes_per_participant: policy.max_votes_per_participant,
            used_votes: used,
            remaining_votes: remaining_votes(policy.max_votes_per_participant, used),
        })
    }

    async fn used_votes(&self, session_id: &str) -> AppResult<i32> {
        let total = self.store.session_vote_total(session_id).await?;
        i32::try_from(total)
            .map_err(|_| CoreError::Internal(format!("Vote total {total} out of range")).into())
    }

    fn session_slot<'a>(&'a self, session_id: &'a str) -> SessionSlot<'a> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let lock = Arc::clone(sessions.entry(session_id.to_string()).or_default());
        SessionSlot {
            sessions: &self.sessions,
            session_id,
            lock,
        }
    }

    /// Sessions that currently hold a lock entry.
    pub fn active_sessions(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use summit_db::models::idea::CreateIdea;
    use summit_db::store::MemoryStore;

    use crate::error::AppError;

    const OPEN: VotePolicy = VotePolicy {
        enabled: true,
        max_votes_per_participant: 3,
    };

    async fn setup() -> (Arc<dyn Store>, DbId) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let idea = store
            .create_idea(&CreateIdea {
                name: "Ada".into(),
                title: "Robots".into(),
                description: String::new(),
                component: None,
                tag: None,
                idea_type: "ai_idea".into(),
            })
            .await
            .unwrap();
        (store, idea.id)
    }

    fn cast(idea_id: DbId, increment: bool) -> CastVote {
        CastVote {
            idea_id,
            session_id: "s1".into(),
            increment,
        }
    }

    #[tokio::test]
    async fn increments_until_budget_then_rejects() {
        let (store, idea_id) = setup().await;
        let ledger = VoteLedger::new(store);

        for expected_remaining in [2, 1, 0] {
            let receipt = ledger.cast(OPEN, &cast(idea_id, true)).await.unwrap();
            assert_eq!(receipt.remaining_votes, expected_remaining);
        }
        let err = ledger.cast(OPEN, &cast(idea_id, true)).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Rejected(_)));
        assert_eq!(ledger.active_sessions(), 0);
    }

    #[tokio::test]
    async fn unvote_to_zero_removes_row() {
        let (store, idea_id) = setup().await;
        let ledger = VoteLedger::new(Arc::clone(&store));

        ledger.cast(OPEN, &cast(idea_id, true)).await.unwrap();
        let receipt = ledger.cast(OPEN, &cast(idea_id, false)).await.unwrap();
        assert!(receipt.vote.is_none());
        assert_eq!(receipt.total_votes, 0);
        assert!(store.find_vote(idea_id, "s1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_idea_is_not_found() {
        let (store, _) = setup().await;
        let ledger = VoteLedger::new(store);
        let err = ledger.cast(OPEN, &cast(999, true)).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn concurrent_votes_never_exceed_budget() {
        let (store, idea_id) = setup().await;
        let ledger = Arc::new(VoteLedger::new(Arc::clone(&store)));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                tokio::spawn(async move { ledger.cast(OPEN, &cast(idea_id, true)).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 3);
        assert_eq!(store.session_vote_total("s1").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn cancelled_casts_leave_no_session_entry() {
        let (store, idea_id) = setup().await;
        let ledger = VoteLedger::new(Arc::clone(&store));
        let wait = std::time::Duration::from_millis(20);

        // Cancelled while holding the session lock.
        let held = tokio::time::timeout(wait, async {
            let slot = ledger.session_slot("s1");
            let _guard = slot.lock.lock().await;
            std::future::pending::<()>().await
        })
        .await;
        assert!(held.is_err());
        assert_eq!(ledger.active_sessions(), 0);

        // Cancelled while queued behind another holder.
        let holder = ledger.session_slot("s1");
        let guard = holder.lock.lock().await;
        let queued = tokio::time::timeout(wait, ledger.cast(OPEN, &cast(idea_id, true))).await;
        assert!(queued.is_err());
        assert_eq!(ledger.active_sessions(), 1);
        drop(guard);
        drop(holder);
        assert_eq!(ledger.active_sessions(), 0);
        assert_eq!(store.session_vote_total("s1").await.unwrap(), 0);

        ledger.cast(OPEN, &cast(idea_id, true)).await.unwrap();
        assert_eq!(ledger.active_sessions(), 0);
    }
}
