//! Study session selection and review application.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::algorithm::interval::{calculate_next_review, get_current_interval};
use crate::algorithm::sampling::{cumulative_distribution, draw_without_replacement};
use crate::error::Result;
use crate::types::{Card, ConfidenceLevel, Reviewable, ReviewedCard};

/// A card is due when it was never scheduled or its due date has passed.
pub fn is_due<C: Reviewable + ?Sized>(card: &C, now: DateTime<Utc>) -> bool {
    match card.next_due_at() {
        Some(due) => due <= now,
        None => true,
    }
}

/// Cards due at `now`, in input order.
pub fn due_cards<C: Reviewable>(cards: Vec<C>, now: DateTime<Utc>) -> Vec<C> {
    cards.into_iter().filter(|card| is_due(card, now)).collect()
}

/// Order every due card for a study session.
///
/// Cards scheduled in the future are dropped. The rest are shuffled by
/// confidence weight, so low-confidence cards tend to come first.
pub fn select_cards_for_review<C, R>(cards: Vec<C>, now: DateTime<Utc>, rng: &mut R) -> Vec<C>
where
    C: Reviewable,
    R: Rng + ?Sized,
{
    let due = due_cards(cards, now);
    if due.is_empty() {
        return due;
    }

    // Table weights are positive, so no validation is needed here.
    let weights: Vec<f64> = due
        .iter()
        .map(|card| card.effective_confidence().weight())
        .collect();
    let total: f64 = weights.iter().sum();
    let cumulative = cumulative_distribution(&weights, total);

    let count = due.len();
    draw_without_replacement(due, &cumulative, count, rng)
}

/// Schedule a card after the learner rated it.
///
/// Returns the updated snapshot: reviewed now, due after the new interval,
/// one more review counted, and the rating recorded as the card's confidence.
pub fn apply_review(card: &Card, rating: ConfidenceLevel, now: DateTime<Utc>) -> Result<ReviewedCard> {
    let previous_interval_days = get_current_interval(card.last_reviewed_at, now);
    let outcome = calculate_next_review(previous_interval_days, rating, now)?;

    let updated = Card {
        confidence_level: Some(rating),
        last_reviewed_at: Some(now),
        next_due_at: Some(outcome.next_due_at),
        review_count: card.review_count.saturating_add(1),
        ..card.clone()
    };

    Ok(ReviewedCard {
        card: updated,
        outcome,
        previous_interval_days,
    })
}
