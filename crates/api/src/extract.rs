//! Request extractors whose rejections use the [`AppError`] JSON body.
//!
//! Plain `axum::Json` and `axum::extract::Query` answer malformed input with
//! a plain-text body; these wrappers route it through `AppError` instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
