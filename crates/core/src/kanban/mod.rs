//! Kanban board logic: column partitioning, category reconciliation and
//! per-idea move coalescing.

pub mod board;
pub mod coalescer;
pub mod reconcile;

pub use board::{partition_by_category, BoardPartition, Categorized};
pub use coalescer::{MoveAdmission, MoveCoalescer, MoveOutcome};
pub use reconcile::{plan_reconciliation, CategoryMove, ReconcilePlan};

/// Default category color when none is supplied.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";
