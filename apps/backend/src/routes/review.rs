//! Review endpoints

use axum::Json;
use chrono::Utc;
use srs_core::{apply_review, calculate_next_review, get_current_interval};

use crate::error::Result;
use crate::models::*;

/// POST /api/review/interval
/// Computes the next interval without touching any card
pub async fn interval(Json(payload): Json<IntervalRequest>) -> Result<Json<IntervalResponse>> {
    let rating = ConfidenceLevel::try_from(payload.confidence_rating)?;
    let now = Utc::now();

    let current_interval_days = payload
        .current_interval_days
        .unwrap_or_else(|| get_current_interval(payload.last_reviewed_at, now));

    let outcome = calculate_next_review(current_interval_days, rating, now)?;

    Ok(Json(IntervalResponse {
        current_interval_days,
        interval_days: outcome.interval_days,
        next_due_at: outcome.next_due_at,
    }))
}

/// POST /api/review
/// Returns the card as it should be stored after the review
pub async fn review(Json(payload): Json<ReviewRequest>) -> Result<Json<ReviewedCard>> {
    let rating = ConfidenceLevel::try_from(payload.confidence_rating)?;
    let now = Utc::now();

    let reviewed = apply_review(&payload.card, rating, now)?;

    tracing::info!(
        card_id = reviewed.card.id,
        rating = rating.to_value(),
        interval_days = reviewed.outcome.interval_days,
        "Scheduled card review"
    );

    Ok(Json(reviewed))
}
