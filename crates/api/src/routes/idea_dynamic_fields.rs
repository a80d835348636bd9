use axum::routing::get;
use axum::Router;

use crate::handlers::idea_dynamic_fields;
use crate::state::AppState;

/// Routes mounted at `/idea-dynamic-fields`.
///
/// ```text
/// GET  /   -> list_dynamic_fields (?ideaId=)
/// POST /   -> create_dynamic_field
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(idea_dynamic_fields::list_dynamic_fields)
            .post(idea_dynamic_fields::create_dynamic_field),
    )
}
