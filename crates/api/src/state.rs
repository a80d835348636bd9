use std::sync::Arc;

use summit_core::kanban::MoveCoalescer;
use summit_db::store::Store;

use crate::config::ServerConfig;
use crate::kanban::KanbanMover;
use crate::settings::SettingsService;
use crate::voting::VoteLedger;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend (memory or Postgres).
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached settings records.
    pub settings: Arc<SettingsService>,
    /// Per-session serialized vote mutations.
    pub votes: Arc<VoteLedger>,
    /// Coalesced kanban moves.
    pub kanban: Arc<KanbanMover>,
}

impl AppState {
    /// Wire the services around a store. Settings are not loaded yet; call
    /// [`SettingsService::load`] before serving.
    pub fn new(store: Arc<dyn Store>, config: ServerConfig) -> Self {
        Self {
            settings: Arc::new(SettingsService::new(Arc::clone(&store))),
            votes: Arc::new(VoteLedger::new(Arc::clone(&store))),
            kanban: Arc::new(KanbanMover::new(
                Arc::clone(&store),
                Arc::new(MoveCoalescer::new()),
            )),
            config: Arc::new(config),
            store,
        }
    }
}
