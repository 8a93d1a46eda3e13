//! Weighted random selection without replacement.
//!
//! This is a biased shuffle, not a uniform one: heavier items tend to be
//! drawn earlier, but no placement is guaranteed.

use rand::Rng;

use crate::error::{Result, SrsError};

/// Select up to `count` items, drawing each with probability proportional to
/// its weight.
///
/// The cumulative distribution is built once over all items. Each draw picks
/// the first item not yet chosen whose cumulative probability is at least the
/// draw. When no such item exists the first remaining item in input order is
/// taken, so the loop always terminates.
///
/// Returns items in selection order. With `count >= items.len()` the result is
/// a permutation of `items`.
pub fn weighted_random_select<T, R>(
    items: Vec<T>,
    weights: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }
    if items.len() != weights.len() {
        return Err(SrsError::LengthMismatch {
            items: items.len(),
            weights: weights.len(),
        });
    }

    let total: f64 = weights.iter().sum();
    let weights_valid = weights.iter().all(|w| w.is_finite() && *w >= 0.0);
    if !weights_valid || !total.is_finite() || total <= 0.0 {
        return Err(SrsError::InvalidWeights);
    }

    let cumulative = cumulative_distribution(weights, total);
    Ok(draw_without_replacement(items, &cumulative, count, rng))
}

/// Running sum of the normalised weights.
pub(crate) fn cumulative_distribution(weights: &[f64], total: f64) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |sum, weight| {
            *sum += weight / total;
            Some(*sum)
        })
        .collect()
}

/// Draw from pre-validated inputs. `cumulative` must have one entry per item.
pub(crate) fn draw_without_replacement<T, R>(
    items: Vec<T>,
    cumulative: &[f64],
    count: usize,
    rng: &mut R,
) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let select_count = count.min(items.len());
    let mut remaining: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut selected = Vec::with_capacity(select_count);

    while selected.len() < select_count {
        let draw: f64 = rng.gen();

        let index = cumulative
            .iter()
            .enumerate()
            .position(|(idx, &cum_prob)| remaining[idx].is_some() && draw <= cum_prob)
            .or_else(|| {
                tracing::trace!(draw, "no weighted candidate, taking first remaining item");
                remaining.iter().position(Option::is_some)
            });

        match index.and_then(|idx| remaining[idx].take()) {
            Some(item) => selected.push(item),
            None => break,
        }
    }

    selected
}
