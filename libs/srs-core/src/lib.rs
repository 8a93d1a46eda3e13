//! Confidence-weighted spaced repetition core shared by the backend service.
//!
//! Provides:
//! - Interval calculation from a 3-level confidence rating
//! - Weighted random sampling without replacement
//! - Due-card filtering and weighted study session ordering
//! - Shared types (Card, ConfidenceLevel, ReviewOutcome, etc.)
//!
//! Nothing in this crate performs I/O. The wall clock is passed in as `now`
//! and randomness as any [`rand::Rng`], so callers decide where both come from.

pub mod algorithm;
pub mod error;
pub mod session;
pub mod types;

pub use algorithm::{
    calculate_next_review, calculate_next_review_raw, get_current_interval,
    weighted_random_select, BASE_GROWTH, MIN_INTERVAL_DAYS,
};
pub use error::{Result, SrsError};
pub use session::{apply_review, due_cards, is_due, select_cards_for_review};
pub use types::{
    Card, ConfidenceLevel, ConfidenceProfile, ReviewOutcome, Reviewable, ReviewedCard,
};
