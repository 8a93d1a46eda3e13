//! Study endpoints

use axum::{extract::State, Json};
use chrono::Utc;
use srs_core::select_cards_for_review;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/study/session
/// Filters the submitted cards to those due now and orders them by confidence weight
pub async fn session(
    State(state): State<AppState>,
    Json(payload): Json<StudySessionRequest>,
) -> Result<Json<StudySessionResponse>> {
    let total_count = payload.cards.len();
    let limit = state.config.max_session_cards;
    if total_count > limit {
        return Err(ApiError::BadRequest(format!(
            "Session accepts at most {} cards, got {}",
            limit, total_count
        )));
    }

    let now = Utc::now();
    let cards = state.with_rng(|rng| select_cards_for_review(payload.cards, now, rng));
    let due_count = cards.len();

    tracing::debug!(total_count, due_count, "Built study session");

    Ok(Json(StudySessionResponse {
        cards,
        due_count,
        total_count,
    }))
}
