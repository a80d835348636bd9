//! Per-idea coalescing of category moves.
//!
//! At most one write per idea is in flight. A move that arrives while
//! another is pending only replaces the pending target; the request that
//! owns the in-flight write picks up the latest target when its write
//! completes and writes again if it changed.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::DbId;

#[derive(Debug, Clone)]
struct PendingMove {
    /// Target of the write currently in flight.
    in_flight: String,
    /// Most recently requested target.
    latest: String,
}

/// Result of asking to move an idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveAdmission {
    /// No move was pending; the caller must perform the write.
    Dispatch,
    /// A move was already pending; its target was replaced.
    Coalesced { replaced: String },
}

/// Outcome of [`MoveCoalescer::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome<T> {
    /// The caller drove the writes and the final target is persisted.
    Committed { value: T, target: String, writes: u32 },
    /// Another caller owns the in-flight write and will persist `target`.
    Coalesced { target: String },
}

/// Tracks in-flight category moves keyed by idea id.
///
/// Thread-safe via an interior `Mutex` that is never held across an await;
/// designed to be wrapped in `Arc` and shared across request handlers.
#[derive(Debug, Default)]
pub struct MoveCoalescer {
    pending: Mutex<HashMap<DbId, PendingMove>>,
}

/// Clears the pending marker when the driving future ends without settling,
/// including when it is dropped mid-write.
struct PendingGuard<'a> {
    coalescer: &'a MoveCoalescer,
    idea_id: DbId,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.coalescer.abandon(self.idea_id);
        }
    }
}

impl MoveCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<DbId, PendingMove>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a move request for `idea_id`.
    pub fn admit(&self, idea_id: DbId, target: &str) -> MoveAdmission {
        let mut pending = self.pending();
        match pending.get_mut(&idea_id) {
            Some(entry) => {
                let replaced = std::mem::replace(&mut entry.latest, target.to_string());
                MoveAdmission::Coalesced { replaced }
            }
            None => {
                pending.insert(
                    idea_id,
                    PendingMove {
                        in_flight: target.to_string(),
                        latest: target.to_string(),
                    },
                );
                MoveAdmission::Dispatch
            }
        }
    }

    /// Record that the write of `written` succeeded.
    ///
    /// Returns the next target to write when a newer move arrived meanwhile;
    /// otherwise clears the pending marker and returns `None`.
    pub fn settle(&self, idea_id: DbId, written: &str) -> Option<String> {
        let mut pending = self.pending();
        let entry = pending.get_mut(&idea_id)?;
        if entry.latest != written {
            entry.in_flight = entry.latest.clone();
            return Some(entry.latest.clone());
        }
        pending.remove(&idea_id);
        None
    }

    /// Clear the pending marker after a failed or cancelled write.
    pub fn abandon(&self, idea_id: DbId) {
        self.pending().remove(&idea_id);
    }

    /// The most recently requested target for a pending move, if any.
    pub fn pending_target(&self, idea_id: DbId) -> Option<String> {
        self.pending().get(&idea_id).map(|p| p.latest.clone())
    }

    /// Number of ideas with a move in flight.
    pub fn pending_count(&self) -> usize {
        self.pending().len()
    }

    /// Move an idea, coalescing with any move already in flight.
    ///
    /// `write` persists one target and is called sequentially, never
    /// concurrently for the same idea. On error the pending marker is
    /// cleared and the error is returned unchanged. Dropping the returned
    /// future also clears the marker; targets coalesced into it are lost.
    pub async fn submit<F, Fut, T, E>(
        &self,
        idea_id: DbId,
        target: String,
        mut write: F,
    ) -> Result<MoveOutcome<T>, E>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let MoveAdmission::Coalesced { .. } = self.admit(idea_id, &target) {
            return Ok(MoveOutcome::Coalesced { target });
        }

        let mut guard = PendingGuard {
            coalescer: self,
            idea_id,
            armed: true,
        };
        let mut current = target;
        let mut writes = 0;
        loop {
            writes += 1;
            // On error the guard clears the marker.
            let value = write(current.clone()).await?;
            match self.settle(idea_id, &current) {
                Some(next) => current = next,
                None => {
                    guard.armed = false;
                    return Ok(MoveOutcome::Committed {
                        value,
                        target: current,
                        writes,
                    });
                }
            }
        }
    }
}
