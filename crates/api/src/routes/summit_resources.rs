use axum::routing::get;
use axum::Router;

use crate::handlers::summit_resources;
use crate::state::AppState;

/// Routes mounted at `/summit-resources`.
///
/// ```text
/// GET    /       -> list_resources
/// POST   /       -> create_resource
/// GET    /{id}   -> get_resource
/// PUT    /{id}   -> update_resource
/// DELETE /{id}   -> delete_resource
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(summit_resources::list_resources).post(summit_resources::create_resource),
        )
        .route(
            "/{id}",
            get(summit_resources::get_resource)
                .put(summit_resources::update_resource)
                .delete(summit_resources::delete_resource),
        )
}
