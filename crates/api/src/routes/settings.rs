use axum::routing::{get, post};
use axum::Router;
use summit_db::models::setting::{
    HeaderSettings, LandingPageSettings, SummitHomeContent, ViewSettings, VotingSettings,
};

use crate::handlers::settings;
use crate::state::AppState;

/// Settings routes, merged directly under `/api`.
///
/// ```text
/// GET, PUT /voting-settings         -> VotingSettings
/// GET, PUT /header-settings         -> HeaderSettings
/// GET, PUT /view-settings           -> ViewSettings
/// GET, PUT /landing-page-settings   -> LandingPageSettings
/// GET, PUT /home-content            -> SummitHomeContent
/// POST     /settings/refresh        -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/voting-settings",
            get(settings::get_record::<VotingSettings>)
                .put(settings::update_record::<VotingSettings>),
        )
        .route(
            "/header-settings",
            get(settings::get_record::<HeaderSettings>)
                .put(settings::update_record::<HeaderSettings>),
        )
        .route(
            "/view-settings",
            get(settings::get_record::<ViewSettings>)
                .put(settings::update_record::<ViewSettings>),
        )
        .route(
            "/landing-page-settings",
            get(settings::get_record::<LandingPageSettings>)
                .put(settings::update_record::<LandingPageSettings>),
        )
        .route(
            "/home-content",
            get(settings::get_record::<SummitHomeContent>)
                .put(settings::update_record::<SummitHomeContent>),
        )
        .route("/settings/refresh", post(settings::refresh))
}
