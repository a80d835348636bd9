mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn ideas_are_listed_newest_first() {
    let app = common::build_test_app().await;
    let first = common::create_idea(&app, "First", "ai_idea").await;
    let second = common::create_idea(&app, "Second", "ai_idea").await;

    let (_, ideas) = common::get(&app, "/api/ideas").await;
    assert_eq!(ideas[0]["id"], second);
    assert_eq!(ideas[1]["id"], first);
}

#[tokio::test]
async fn raw_create_validates_lengths() {
    let app = common::build_test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/ideas",
        json!({"name": "", "title": "T", "type": "ai_idea"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn bulk_delete_reports_missing_ids() {
    let app = common::build_test_app().await;
    let a = common::create_idea(&app, "A", "ai_idea").await;
    let b = common::create_idea(&app, "B", "ai_idea").await;

    let (status, body) =
        common::post_json(&app, "/api/ideas/bulk-delete", json!({"ids": [a, 999, b]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], json!([a, b]));
    assert_eq!(body["notFound"], json!([999]));

    let (status, _) = common::post_json(&app, "/api/ideas/bulk-delete", json!({"ids": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dynamic_fields_need_an_existing_idea() {
    let app = common::build_test_app().await;
    let (_, fields) = common::get(&app, "/api/form-fields").await;
    let field_id = fields[0]["id"].clone();

    let (status, _) = common::post_json(
        &app,
        "/api/idea-dynamic-fields",
        json!({"ideaId": 12345, "fieldId": field_id, "value": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let idea = common::create_idea(&app, "A", "ai_idea").await;
    let (status, _) = common::post_json(
        &app,
        "/api/idea-dynamic-fields",
        json!({"ideaId": idea, "fieldId": field_id, "value": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, rows) = common::get(&app, &format!("/api/idea-dynamic-fields?ideaId={idea}")).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn dynamic_field_value_must_not_be_blank() {
    let app = common::build_test_app().await;
    let (_, fields) = common::get(&app, "/api/form-fields").await;
    let field_id = fields[0]["id"].clone();
    let idea = common::create_idea(&app, "A", "ai_idea").await;

    for value in ["", "   "] {
        let (status, body) = common::post_json(
            &app,
            "/api/idea-dynamic-fields",
            json!({"ideaId": idea, "fieldId": field_id, "value": value}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{value:?}");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let (_, rows) = common::get(&app, &format!("/api/idea-dynamic-fields?ideaId={idea}")).await;
    assert!(rows.as_array().unwrap().is_empty());
}
