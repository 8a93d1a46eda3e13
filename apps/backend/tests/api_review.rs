//! Review API tests.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;
use srs_backend::models::{ConfidenceLevel, IntervalResponse, ReviewedCard};

/// Allow for the time between building the request and the handler reading the clock.
fn assert_close_to(actual: DateTime<Utc>, expected: DateTime<Utc>) {
    let drift = (actual - expected).num_seconds().abs();
    assert!(drift <= 5, "expected {expected}, got {actual}");
}

#[tokio::test]
async fn test_interval_medium_on_ten_days() {
    let server = TestContext::new().server();

    let before = Utc::now();
    let response = server
        .post("/api/review/interval")
        .json(&fixtures::interval_request(10, 2))
        .await;

    response.assert_status_ok();
    let body: IntervalResponse = response.json();
    assert_eq!(body.current_interval_days, 10);
    assert_eq!(body.interval_days, 26);
    assert_close_to(body.next_due_at, before + Duration::days(26));
}

#[tokio::test]
async fn test_interval_new_card_low_confidence() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/review/interval")
        .json(&serde_json::json!({ "confidence_rating": 1 }))
        .await;

    response.assert_status_ok();
    let body: IntervalResponse = response.json();
    assert_eq!(body.current_interval_days, 0);
    assert_eq!(body.interval_days, 2);
}

#[tokio::test]
async fn test_interval_from_last_review() {
    let server = TestContext::new().server();

    let last_reviewed_at = Utc::now() - Duration::days(5) - Duration::hours(2);
    let response = server
        .post("/api/review/interval")
        .json(&fixtures::interval_request_since(last_reviewed_at, 3))
        .await;

    response.assert_status_ok();
    let body: IntervalResponse = response.json();
    assert_eq!(body.current_interval_days, 5);
    assert_eq!(body.interval_days, 18);
}

#[tokio::test]
async fn test_interval_future_last_review_counts_as_new() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/review/interval")
        .json(&fixtures::interval_request_since(Utc::now() + Duration::days(2), 2))
        .await;

    response.assert_status_ok();
    let body: IntervalResponse = response.json();
    assert_eq!(body.current_interval_days, 0);
    assert_eq!(body.interval_days, 3);
}

#[tokio::test]
async fn test_interval_rejects_invalid_rating() {
    let server = TestContext::new().server();

    for rating in [0, 4, -1] {
        let response = server
            .post("/api/review/interval")
            .json(&fixtures::interval_request(3, rating))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "invalid_argument");
    }
}

#[tokio::test]
async fn test_interval_rejects_negative_interval() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/review/interval")
        .json(&fixtures::interval_request(-2, 2))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid_argument");
    assert!(body["message"].as_str().unwrap().contains("negative"));
}

#[tokio::test]
async fn test_review_new_card() {
    let server = TestContext::new().server();
    let card = fixtures::new_card(42);

    let before = Utc::now();
    let response = server
        .post("/api/review")
        .json(&fixtures::review_request(&card, 3))
        .await;

    response.assert_status_ok();
    let reviewed: ReviewedCard = response.json();
    assert_eq!(reviewed.previous_interval_days, 0);
    assert_eq!(reviewed.outcome.interval_days, 4);
    assert_eq!(reviewed.card.id, 42);
    assert_eq!(reviewed.card.question, card.question);
    assert_eq!(reviewed.card.review_count, 1);
    assert_eq!(reviewed.card.confidence_level, Some(ConfidenceLevel::High));
    assert_eq!(reviewed.card.next_due_at, Some(reviewed.outcome.next_due_at));
    assert_close_to(reviewed.card.last_reviewed_at.unwrap(), before);
    assert_close_to(reviewed.outcome.next_due_at, before + Duration::days(4));
}

#[tokio::test]
async fn test_review_existing_card_grows_interval() {
    let server = TestContext::new().server();
    let card = fixtures::scheduled_card(7, Some(ConfidenceLevel::Medium), -1);

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request(&card, 1))
        .await;

    response.assert_status_ok();
    let reviewed: ReviewedCard = response.json();
    assert_eq!(reviewed.previous_interval_days, 3);
    assert_eq!(reviewed.outcome.interval_days, 7);
    assert_eq!(reviewed.card.review_count, 3);
    assert_eq!(reviewed.card.confidence_level, Some(ConfidenceLevel::Low));
}

#[tokio::test]
async fn test_review_rejects_invalid_rating() {
    let server = TestContext::new().server();
    let card = fixtures::new_card(1);

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request(&card, 5))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
