//! Category moves and category reconciliation.
//!
//! Every write of an idea's category goes through the shared
//! [`MoveCoalescer`], so an interactive move and a reconciliation pass never
//! write the same idea concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use summit_core::error::CoreError;
use summit_core::kanban::{plan_reconciliation, CategoryMove, MoveCoalescer, MoveOutcome};
use summit_core::types::DbId;
use summit_db::models::idea::Idea;
use summit_db::store::Store;

use crate::error::{AppError, AppResult};

/// Result of a single move request.
#[derive(Debug, Clone)]
pub enum MoveResult {
    /// The idea already had the target category; nothing was written.
    Unchanged(Idea),
    /// This request drove the writes; `idea` is the persisted state.
    Moved { idea: Idea, writes: u32 },
    /// Another request owns the in-flight write and will persist `target`.
    Coalesced { idea_id: DbId, target: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveFailure {
    pub idea_id: DbId,
    pub error: String,
}

/// What a reconciliation pass planned and what it managed to write.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub planned: Vec<CategoryMove>,
    pub applied: Vec<CategoryMove>,
    pub failed: Vec<MoveFailure>,
    /// Ideas left outside the active categories.
    pub unresolved: Vec<DbId>,
}

pub struct KanbanMover {
    store: Arc<dyn Store>,
    coalescer: Arc<MoveCoalescer>,
}

impl KanbanMover {
    pub fn new(store: Arc<dyn Store>, coalescer: Arc<MoveCoalescer>) -> Self {
        Self { store, coalescer }
    }

    /// Keys of the active categories in board order.
    pub async fn active_keys(&self) -> AppResult<Vec<String>> {
        Ok(self
            .store
            .list_kanban_categories()
            .await?
            .into_iter()
            .filter(|c| c.is_active)
            .map(|c| c.key)
            .collect())
    }

    /// Move an idea to the category `target`.
    pub async fn move_idea(&self, idea_id: DbId, target: &str) -> AppResult<MoveResult> {
        if !self.active_keys().await?.iter().any(|k| k == target) {
            return Err(CoreError::Validation(format!(
                "'{target}' is not an active kanban category"
            ))
            .into());
        }

        let idea = self
            .store
            .find_idea(idea_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Idea",
                id: idea_id,
            })?;

        if idea.idea_type == target && self.coalescer.pending_target(idea_id).is_none() {
            return Ok(MoveResult::Unchanged(idea));
        }

        match self.write_through_coalescer(idea_id, target).await? {
            MoveOutcome::Committed { value, writes, target } => {
                tracing::info!(idea_id, category = %target, writes, "Idea moved");
                Ok(MoveResult::Moved { idea: value, writes })
            }
            MoveOutcome::Coalesced { target } => {
                tracing::debug!(idea_id, category = %target, "Idea move coalesced");
                Ok(MoveResult::Coalesced { idea_id, target })
            }
        }
    }

    /// Persist `target` through the coalescer.
    ///
    /// The write loop runs in its own task, so moves coalesced into it are
    /// still written when the request that started it is dropped.
    async fn write_through_coalescer(
        &self,
        idea_id: DbId,
        target: &str,
    ) -> AppResult<MoveOutcome<Idea>> {
        let store = Arc::clone(&self.store);
        let coalescer = Arc::clone(&self.coalescer);
        let target = target.to_string();

        let task = tokio::spawn(async move {
            coalescer
                .submit(idea_id, target, move |category| {
                    let store = Arc::clone(&store);
                    async move {
                        match store.update_idea_category(idea_id, &category).await {
                            Ok(Some(idea)) => Ok(idea),
                            Ok(None) => Err(AppError::Core(CoreError::NotFound {
                                entity: "Idea",
                                id: idea_id,
                            })),
                            Err(e) => Err(AppError::Store(e)),
                        }
                    }
                })
                .await
        });

        task.await
            .map_err(|e| AppError::InternalError(format!("Category move task failed: {e}")))?
    }

    /// Rewrite the category of ideas whose key is renamed or no longer active.
    ///
    /// Not atomic: each idea is written separately and failures are reported
    /// per idea.
    pub async fn reconcile(
        &self,
        renames: &HashMap<String, String>,
        fallback: Option<&str>,
    ) -> AppResult<ReconcileReport> {
        let active = self.active_keys().await?;
        let ideas = self.store.list_ideas().await?;
        let plan = plan_reconciliation(
            ideas.iter().map(|i| (i.id, i.idea_type.as_str())),
            &active,
            renames,
            fallback,
        )?;

        let mut report = ReconcileReport {
            planned: plan.moves.clone(),
            unresolved: plan.unresolved,
            ..ReconcileReport::default()
        };

        for mv in plan.moves {
            match self.write_through_coalescer(mv.idea_id, &mv.to).await {
                Ok(_) => report.applied.push(mv),
                Err(e) => {
                    tracing::warn!(idea_id = mv.idea_id, error = %e, "Reconcile move failed");
                    report.failed.push(MoveFailure {
                        idea_id: mv.idea_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            planned = report.planned.len(),
            applied = report.applied.len(),
            failed = report.failed.len(),
            unresolved = report.unresolved.len(),
            "Category reconciliation finished",
        );
        Ok(report)
    }
}
