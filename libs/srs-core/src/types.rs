//! Core types for confidence-based scheduling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SrsError;

/// How well the learner already knows a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ConfidenceLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Sampling weight and interval growth for one confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceProfile {
    pub label: &'static str,
    pub weight: f64,
    pub difficulty_multiplier: f64,
}

/// Indexed by `ConfidenceLevel as usize - 1`.
const PROFILES: [ConfidenceProfile; 3] = [
    ConfidenceProfile {
        label: "Less Confident",
        weight: 6.0,
        difficulty_multiplier: 1.1,
    },
    ConfidenceProfile {
        label: "Medium",
        weight: 3.0,
        difficulty_multiplier: 1.3,
    },
    ConfidenceProfile {
        label: "More Confident",
        weight: 1.0,
        difficulty_multiplier: 1.8,
    },
];

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Numeric value (1-3).
    pub fn to_value(self) -> u8 {
        self as u8
    }

    /// Create from numeric value (1-3).
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub fn profile(self) -> &'static ConfidenceProfile {
        &PROFILES[self as usize - 1]
    }

    /// Sampling weight. Less confident cards get higher weights and surface earlier.
    pub fn weight(self) -> f64 {
        self.profile().weight
    }

    /// Interval growth factor applied on top of the base growth.
    pub fn difficulty_multiplier(self) -> f64 {
        self.profile().difficulty_multiplier
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }
}

impl TryFrom<i64> for ConfidenceLevel {
    type Error = SrsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_value)
            .ok_or(SrsError::InvalidConfidence { value })
    }
}

impl TryFrom<u8> for ConfidenceLevel {
    type Error = SrsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(SrsError::InvalidConfidence {
            value: i64::from(value),
        })
    }
}

impl From<ConfidenceLevel> for u8 {
    fn from(level: ConfidenceLevel) -> Self {
        level.to_value()
    }
}

/// The scheduling view of a card.
///
/// Implemented by [`Card`] and by references to any implementor, so session
/// selection works on owned snapshots as well as borrowed ones.
pub trait Reviewable {
    fn last_reviewed_at(&self) -> Option<DateTime<Utc>>;

    fn next_due_at(&self) -> Option<DateTime<Utc>>;

    fn confidence_level(&self) -> Option<ConfidenceLevel>;

    /// Confidence used for weighting. Cards without one count as medium.
    fn effective_confidence(&self) -> ConfidenceLevel {
        self.confidence_level().unwrap_or_default()
    }
}

impl<T: Reviewable + ?Sized> Reviewable for &T {
    fn last_reviewed_at(&self) -> Option<DateTime<Utc>> {
        (**self).last_reviewed_at()
    }

    fn next_due_at(&self) -> Option<DateTime<Utc>> {
        (**self).next_due_at()
    }

    fn confidence_level(&self) -> Option<ConfidenceLevel> {
        (**self).confidence_level()
    }
}

/// Card snapshot as stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<i64>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub confidence_level: Option<ConfidenceLevel>,
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_count: u32,
}

impl Card {
    /// A never-reviewed card.
    pub fn new(id: i64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            deck_id: None,
            question: question.into(),
            answer: answer.into(),
            confidence_level: None,
            last_reviewed_at: None,
            next_due_at: None,
            review_count: 0,
        }
    }
}

impl Reviewable for Card {
    fn last_reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.last_reviewed_at
    }

    fn next_due_at(&self) -> Option<DateTime<Utc>> {
        self.next_due_at
    }

    fn confidence_level(&self) -> Option<ConfidenceLevel> {
        self.confidence_level
    }
}

/// Result of one interval calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub interval_days: i64,
    pub next_due_at: DateTime<Utc>,
}

/// Card snapshot after a review, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedCard {
    pub card: Card,
    pub outcome: ReviewOutcome,
    pub previous_interval_days: i64,
}
