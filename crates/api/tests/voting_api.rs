mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn vote(app: &axum::Router, idea_id: i64, session: &str, increment: bool) -> (StatusCode, serde_json::Value) {
    common::post_json(
        app,
        "/api/votes",
        json!({"ideaId": idea_id, "sessionId": session, "increment": increment}),
    )
    .await
}

#[tokio::test]
async fn spent_budget_rejects_further_votes() {
    let app = common::build_test_app().await;
    let a = common::create_idea(&app, "A", "ai_idea").await;
    let b = common::create_idea(&app, "B", "ai_story").await;

    for idea in [a, a, a, b, b] {
        let (status, body) = vote(&app, idea, "sess-1", true).await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }

    let (status, body) = vote(&app, b, "sess-1", true).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "REJECTED");

    let (status, remaining) = common::get(&app, "/api/votes/remaining?sessionId=sess-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(remaining["usedVotes"], 5);
    assert_eq!(remaining["remainingVotes"], 0);
}

#[tokio::test]
async fn receipt_tracks_counts_and_unvote_removes_the_row() {
    let app = common::build_test_app().await;
    let idea = common::create_idea(&app, "A", "ai_idea").await;

    let (_, receipt) = vote(&app, idea, "sess-2", true).await;
    assert_eq!(receipt["vote"]["voteCount"], 1);
    assert_eq!(receipt["remainingVotes"], 4);
    assert_eq!(receipt["totalVotes"], 1);

    let (status, receipt) = vote(&app, idea, "sess-2", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(receipt["vote"].is_null());
    assert_eq!(receipt["remainingVotes"], 5);

    let (_, votes) = common::get(&app, "/api/votes?sessionId=sess-2").await;
    assert_eq!(votes.as_array().unwrap().len(), 0);

    let (status, body) = vote(&app, idea, "sess-2", false).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "REJECTED");
}

#[tokio::test]
async fn closing_voting_rejects_votes() {
    let app = common::build_test_app().await;
    let idea = common::create_idea(&app, "A", "ai_idea").await;

    let (status, _) = common::put_json(&app, "/api/voting-settings", json!({"votingEnabled": false})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = vote(&app, idea, "sess-3", true).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "REJECTED");

    let (_, remaining) = common::get(&app, "/api/votes/remaining?sessionId=sess-3").await;
    assert_eq!(remaining["votingEnabled"], false);
}

#[tokio::test]
async fn vote_for_unknown_idea_is_404() {
    let app = common::build_test_app().await;
    let (status, body) = vote(&app, 999, "sess-4", true).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn remaining_requires_a_session() {
    let app = common::build_test_app().await;
    let (status, body) = common::get(&app, "/api/votes/remaining").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn totals_sum_across_sessions() {
    let app = common::build_test_app().await;
    let idea = common::create_idea(&app, "A", "ai_idea").await;
    vote(&app, idea, "s1", true).await;
    vote(&app, idea, "s1", true).await;
    vote(&app, idea, "s2", true).await;

    let (_, totals) = common::get(&app, "/api/votes/totals").await;
    assert_eq!(totals, json!([{"ideaId": idea, "totalVotes": 3}]));

    let (_, ideas) = common::get(&app, "/api/ideas").await;
    assert_eq!(ideas[0]["totalVotes"], 3);
}

#[tokio::test]
async fn deleting_an_idea_refunds_its_votes() {
    let app = common::build_test_app().await;
    let idea = common::create_idea(&app, "A", "ai_idea").await;
    vote(&app, idea, "s1", true).await;

    let (status, _) = common::delete(&app, &format!("/api/ideas/{idea}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, remaining) = common::get(&app, "/api/votes/remaining?sessionId=s1").await;
    assert_eq!(remaining["remainingVotes"], 5);
}

#[tokio::test]
async fn missing_increment_is_a_json_validation_error() {
    let app = common::build_test_app().await;
    let idea_id = common::create_idea(&app, "Voted", "ai_idea").await;

    let (status, body) = common::post_json(
        &app,
        "/api/votes",
        json!({"ideaId": idea_id, "sessionId": "s1"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("increment"), "{body}");
}
