//! Health and reference endpoints

use axum::Json;
use chrono::Utc;

use crate::models::{ConfidenceLevel, ConfidenceLevelInfo, HealthResponse};

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// GET /api/health
pub async fn status() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /api/confidence-levels
pub async fn confidence_levels() -> Json<Vec<ConfidenceLevelInfo>> {
    Json(
        ConfidenceLevel::ALL
            .into_iter()
            .map(ConfidenceLevelInfo::from)
            .collect(),
    )
}
