//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use summit_api::error::AppError;
use summit_core::error::CoreError;
use summit_core::form::FieldViolation;
use summit_db::StoreError;
use validator::Validate;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Idea",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Idea with id 42 not found");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("sessionId is required".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "sessionId is required");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn invalid_fields_carry_details() {
    let err = AppError::Core(CoreError::InvalidFields(vec![FieldViolation::new(
        "submitter_name",
        "is required",
    )]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["field"], "submitter_name");
    assert_eq!(json["details"][0]["message"], "is required");
}

#[tokio::test]
async fn rejected_returns_409_with_its_own_code() {
    let err = AppError::Core(CoreError::Rejected("Voting is closed".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "REJECTED");
    assert_eq!(json["error"], "Voting is closed");
}

#[tokio::test]
async fn store_conflict_returns_409() {
    let err = AppError::Store(StoreError::Conflict("key 'ai_idea' already exists".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn store_unavailable_is_sanitized() {
    let err = AppError::Store(StoreError::Unavailable("connection refused".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("secret"));
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::RowNotFound));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[derive(Validate)]
struct Probe {
    #[validate(length(min = 1))]
    display_order_label: String,
}

#[tokio::test]
async fn validator_errors_use_camel_case_names() {
    let probe = Probe {
        display_order_label: String::new(),
    };
    let err: AppError = probe.validate().unwrap_err().into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["field"], "displayOrderLabel");
}
