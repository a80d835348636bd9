use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST /           -> submit
/// POST /validate   -> validate (dry run)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submissions::submit))
        .route("/validate", post(submissions::validate))
}
