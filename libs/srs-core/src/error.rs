//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using SrsError.
pub type Result<T> = std::result::Result<T, SrsError>;

/// Errors raised when a caller passes a value outside the documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SrsError {
    #[error("invalid confidence rating {value}: expected 1, 2 or 3")]
    InvalidConfidence { value: i64 },

    #[error("interval must not be negative, got {days} days")]
    NegativeInterval { days: i64 },

    #[error("items and weights must have the same length ({items} items, {weights} weights)")]
    LengthMismatch { items: usize, weights: usize },

    #[error("weights must be finite, non-negative and sum to a positive value")]
    InvalidWeights,

    #[error("interval of {days} days is out of range")]
    IntervalOverflow { days: i64 },
}

impl SrsError {
    /// Every variant is a caller precondition violation; none are retryable.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfidence { .. }
                | Self::NegativeInterval { .. }
                | Self::LengthMismatch { .. }
                | Self::InvalidWeights
                | Self::IntervalOverflow { .. }
        )
    }
}
