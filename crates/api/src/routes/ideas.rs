use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::ideas;
use crate::state::AppState;

/// Routes mounted at `/ideas`.
///
/// ```text
/// GET    /                -> list_ideas
/// POST   /                -> create_idea
/// POST   /bulk-delete     -> bulk_delete_ideas
/// GET    /{id}            -> get_idea
/// DELETE /{id}            -> delete_idea
/// PUT    /{id}/category   -> move_idea
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas::list_ideas).post(ideas::create_idea))
        .route("/bulk-delete", post(ideas::bulk_delete_ideas))
        .route("/{id}", get(ideas::get_idea).delete(ideas::delete_idea))
        .route("/{id}/category", put(ideas::move_idea))
}
