use axum::routing::get;
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Routes mounted at `/votes`.
///
/// ```text
/// GET  /            -> list_votes (?sessionId=)
/// POST /            -> cast_vote
/// GET  /remaining   -> remaining_votes (?sessionId=)
/// GET  /totals      -> vote_totals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(votes::list_votes).post(votes::cast_vote))
        .route("/remaining", get(votes::remaining_votes))
        .route("/totals", get(votes::vote_totals))
}
