//! Scheduling algorithms.

pub mod interval;
pub mod sampling;

pub use interval::{
    calculate_next_review, calculate_next_review_raw, get_current_interval, BASE_GROWTH,
    MIN_INTERVAL_DAYS,
};
pub use sampling::weighted_random_select;
