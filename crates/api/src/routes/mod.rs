pub mod form_fields;
pub mod health;
pub mod idea_dynamic_fields;
pub mod ideas;
pub mod kanban;
pub mod settings;
pub mod submissions;
pub mod summit_resources;
pub mod votes;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /summit-resources                       list, create
/// /summit-resources/{id}                  get, update, delete
///
/// /ideas                                  list (with totals), create
/// /ideas/bulk-delete                      delete many (POST)
/// /ideas/{id}                             get (with dynamic fields), delete
/// /ideas/{id}/category                    kanban move (PUT)
///
/// /submissions                            submit through the form engine
/// /submissions/validate                   dry run
///
/// /form-fields                            list, create
/// /form-fields/descriptors                active form with options
/// /form-fields/{id}                       get, update, delete
/// /form-field-options                     list, create
/// /form-field-options/{id}                update, delete
/// /idea-dynamic-fields                    list, create
///
/// /kanban-categories                      list, create
/// /kanban-categories/{id}                 update, delete
/// /kanban/board                           columns + unassigned
/// /kanban/reconcile                       repair category keys (POST)
///
/// /votes                                  list, vote/unvote
/// /votes/remaining                        session budget
/// /votes/totals                           per-idea sums
///
/// /voting-settings, /header-settings,
/// /view-settings, /landing-page-settings,
/// /home-content                           get, partial update
/// /settings/refresh                       reload cache (POST)
///
/// /statistics                             analytics aggregates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/summit-resources", summit_resources::router())
        .nest("/ideas", ideas::router())
        .nest("/submissions", submissions::router())
        .nest("/form-fields", form_fields::fields_router())
        .nest("/form-field-options", form_fields::options_router())
        .nest("/idea-dynamic-fields", idea_dynamic_fields::router())
        .nest("/kanban-categories", kanban::categories_router())
        .nest("/kanban", kanban::board_router())
        .nest("/votes", votes::router())
        .merge(settings::router())
        .route("/statistics", get(handlers::statistics::get_statistics))
}
