//! Kanban routes. Two routers are provided:
//! - `categories_router()` for category CRUD mounted at `/kanban-categories`
//! - `board_router()` for the board view and reconciliation mounted at `/kanban`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::kanban;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_categories
/// POST   /       -> create_category
/// PUT    /{id}   -> update_category
/// DELETE /{id}   -> delete_category
/// ```
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(kanban::list_categories).post(kanban::create_category),
        )
        .route(
            "/{id}",
            put(kanban::update_category).delete(kanban::delete_category),
        )
}

/// ```text
/// GET  /board       -> get_board
/// POST /reconcile   -> reconcile
/// ```
pub fn board_router() -> Router<AppState> {
    Router::new()
        .route("/board", get(kanban::get_board))
        .route("/reconcile", post(kanban::reconcile))
}
