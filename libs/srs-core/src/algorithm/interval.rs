//! Confidence-based interval growth.
//!
//! Every review at least doubles the interval (`BASE_GROWTH`), then the
//! confidence level's difficulty multiplier stretches it further:
//!
//! `next = round(max(base * 2.0 * multiplier, 1))`
//!
//! where `base` is the current interval, or one day for a brand new card.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, SrsError};
use crate::types::{ConfidenceLevel, ReviewOutcome};

/// Base growth factor applied on every review.
pub const BASE_GROWTH: f64 = 2.0;

/// Minimum interval in days.
pub const MIN_INTERVAL_DAYS: i64 = 1;

/// Calculate the next interval and due date for a review.
///
/// `current_interval_days` is 0 for a card that has never been reviewed.
pub fn calculate_next_review(
    current_interval_days: i64,
    rating: ConfidenceLevel,
    now: DateTime<Utc>,
) -> Result<ReviewOutcome> {
    if current_interval_days < 0 {
        return Err(SrsError::NegativeInterval {
            days: current_interval_days,
        });
    }

    let base_interval = if current_interval_days == 0 {
        1
    } else {
        current_interval_days
    };

    let mut raw_interval = base_interval as f64 * BASE_GROWTH * rating.difficulty_multiplier();
    // Unreachable with the current multipliers; kept as a floor.
    if raw_interval < MIN_INTERVAL_DAYS as f64 {
        raw_interval = MIN_INTERVAL_DAYS as f64;
    }

    let interval_days = raw_interval.round() as i64;
    let next_due_at = Duration::try_days(interval_days)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or(SrsError::IntervalOverflow {
            days: interval_days,
        })?;

    Ok(ReviewOutcome {
        interval_days,
        next_due_at,
    })
}

/// Same as [`calculate_next_review`] but validates a raw 1-3 rating first.
pub fn calculate_next_review_raw(
    current_interval_days: i64,
    rating: i64,
    now: DateTime<Utc>,
) -> Result<ReviewOutcome> {
    let rating = ConfidenceLevel::try_from(rating)?;
    calculate_next_review(current_interval_days, rating, now)
}

/// Whole days since the last review, 0 for a card never reviewed.
///
/// A `last_reviewed_at` in the future (clock skew) also yields 0.
pub fn get_current_interval(last_reviewed_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match last_reviewed_at {
        Some(last_review) => now.signed_duration_since(last_review).num_days().max(0),
        None => 0,
    }
}
