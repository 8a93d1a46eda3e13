//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from srs-core
pub use srs_core::types::{Card, ConfidenceLevel, ReviewOutcome, ReviewedCard};

// === Review API Types ===

/// Request for POST /api/review/interval
///
/// Supply either the current interval or the last review time. With neither
/// the card is treated as never reviewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalRequest {
    #[serde(default)]
    pub current_interval_days: Option<i64>,
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub confidence_rating: i64,
}

/// Response for POST /api/review/interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalResponse {
    pub current_interval_days: i64,
    pub interval_days: i64,
    pub next_due_at: DateTime<Utc>,
}

/// Request for POST /api/review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub card: Card,
    pub confidence_rating: i64,
}

// === Study API Types ===

/// Request for POST /api/study/session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionRequest {
    pub cards: Vec<Card>,
}

/// Response for POST /api/study/session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionResponse {
    pub cards: Vec<Card>,
    pub due_count: usize,
    pub total_count: usize,
}

// === Reference API Types ===

/// One row of the confidence table, for rating buttons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceLevelInfo {
    pub level: ConfidenceLevel,
    pub label: String,
    pub weight: f64,
    pub difficulty_multiplier: f64,
}

impl From<ConfidenceLevel> for ConfidenceLevelInfo {
    fn from(level: ConfidenceLevel) -> Self {
        let profile = level.profile();
        Self {
            level,
            label: profile.label.to_string(),
            weight: profile.weight,
            difficulty_multiplier: profile.difficulty_multiplier,
        }
    }
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
