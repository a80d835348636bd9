//! Routes for the submission form: fields, their options and the
//! descriptors the form is rendered from.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{form_field_options, form_fields};
use crate::state::AppState;

/// Routes mounted at `/form-fields`.
///
/// ```text
/// GET    /              -> list_fields (?activeOnly=)
/// POST   /              -> create_field
/// GET    /descriptors   -> list_descriptors
/// GET    /{id}          -> get_field
/// PUT    /{id}          -> update_field
/// DELETE /{id}          -> delete_field
/// ```
pub fn fields_router() -> Router<AppState> {
    Router::new()
        .route("/", get(form_fields::list_fields).post(form_fields::create_field))
        .route("/descriptors", get(form_fields::list_descriptors))
        .route(
            "/{id}",
            get(form_fields::get_field)
                .put(form_fields::update_field)
                .delete(form_fields::delete_field),
        )
}

/// Routes mounted at `/form-field-options`.
///
/// ```text
/// GET    /       -> list_options (?fieldId=)
/// POST   /       -> create_option
/// PUT    /{id}   -> update_option
/// DELETE /{id}   -> delete_option
/// ```
pub fn options_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(form_field_options::list_options).post(form_field_options::create_option),
        )
        .route(
            "/{id}",
            put(form_field_options::update_option).delete(form_field_options::delete_option),
        )
}
