//! Weighted random choice.
//!
//! A plain linear scan: draw `r` in `[0, total)`, walk the items with a running
//! sum `x`, return the first item where `x + weight > r`. The comparison is
//! strict, so an item of weight 0 can never be returned.
//!
//! The draw and the scan are split ([`choose`] / [`choose_at`]) so the scan's
//! boundary behaviour can be tested against exact values of `r`.
//!
//! # Overflowing weights
//! Values grow exponentially with age, so very old tasks reach `+inf`.
//! - Any infinite weight: the infinite items share the draw uniformly and
//!   every finite item is skipped.
//! - Finite weights whose sum overflows: weights are divided by the largest
//!   one first, which keeps their proportions.

use rand::Rng;
use tracing::trace;

/// Pick one of `items` with probability proportional to `weights`.
///
/// Returns `None` only when there is nothing to pick: no items, or weights
/// that are all zero or not numbers. `weights` and `items` are paired by position; extra
/// entries on either side are ignored.
pub fn choose<'a, T, R>(weights: &[f64], items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let len = weights.len().min(items.len());
    let (weights, items) = (&weights[..len], &items[..len]);

    let saturated: Vec<&T> = weights
        .iter()
        .zip(items)
        .filter(|(w, _)| **w == f64::INFINITY)
        .map(|(_, item)| item)
        .collect();
    if !saturated.is_empty() {
        let pick = rng.gen_range(0..saturated.len());
        trace!(count = saturated.len(), pick, "infinite weights, uniform draw");
        return Some(saturated[pick]);
    }

    let total: f64 = weights.iter().sum();
    if total.is_infinite() {
        let max = weights.iter().copied().fold(0.0, f64::max);
        let scaled: Vec<f64> = weights.iter().map(|w| w / max).collect();
        return draw(&scaled, items, rng);
    }
    draw(weights, items, rng)
}

fn draw<'a, T, R>(weights: &[f64], items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    let r = rng.gen_range(0.0..total);
    trace!(total, r, "weighted draw");
    choose_at(weights, items, r)
}

/// The scan half of [`choose`], for a given draw `r` in `[0, total)`.
pub fn choose_at<'a, T>(weights: &[f64], items: &'a [T], r: f64) -> Option<&'a T> {
    let mut x = 0.0;
    for (weight, item) in weights.iter().zip(items) {
        if x + weight > r {
            return Some(item);
        }
        x += weight;
    }
    None
}
