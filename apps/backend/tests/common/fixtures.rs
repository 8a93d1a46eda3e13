//! Test fixtures and factory functions for creating test data.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use srs_backend::models::{Card, ConfidenceLevel};

/// A never-reviewed card.
pub fn new_card(id: i64) -> Card {
    Card::new(id, format!("Question {}?", id), format!("Answer {}.", id))
}

/// A card with a confidence level and due date offset from now (negative is overdue).
pub fn scheduled_card(id: i64, level: Option<ConfidenceLevel>, due_in_days: i64) -> Card {
    Card {
        confidence_level: level,
        last_reviewed_at: Some(Utc::now() - Duration::days(3)),
        next_due_at: Some(Utc::now() + Duration::days(due_in_days)),
        review_count: 2,
        ..new_card(id)
    }
}

/// Body for POST /api/review/interval using an explicit interval.
pub fn interval_request(current_interval_days: i64, confidence_rating: i64) -> Value {
    json!({
        "current_interval_days": current_interval_days,
        "confidence_rating": confidence_rating,
    })
}

/// Body for POST /api/review/interval using the last review time.
pub fn interval_request_since(last_reviewed_at: DateTime<Utc>, confidence_rating: i64) -> Value {
    json!({
        "last_reviewed_at": last_reviewed_at,
        "confidence_rating": confidence_rating,
    })
}

/// Body for POST /api/review.
pub fn review_request(card: &Card, confidence_rating: i64) -> Value {
    json!({
        "card": card,
        "confidence_rating": confidence_rating,
    })
}

/// Body for POST /api/study/session.
pub fn session_request(cards: &[Card]) -> Value {
    json!({ "cards": cards })
}
