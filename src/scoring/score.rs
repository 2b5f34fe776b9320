//! Value-score computation.

use super::item::Item;
use super::weights::Weights;

/// An item paired with its computed value score.
///
/// Produced by [`score_items`]; this pairing is what the solving strategies
/// consume, so the raw [`Item`] stays immutable through the whole run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredItem {
    /// The underlying candidate.
    pub item: Item,
    /// Weighted value score, in [1, 10] for validated inputs.
    pub score: f64,
}

/// Computes the weighted value score of a single item.
///
/// `urgency * w_urgency + education * w_education + satisfaction * w_satisfaction`.
/// Pure and deterministic; with ratings in [1, 10] and weights summing to 1
/// the result is bounded by [1, 10].
///
/// # Examples
///
/// ```
/// use mcda_knapsack::scoring::{value_score, Category, Item, Weights};
///
/// let weights = Weights::new(0.5, 0.3, 0.2).unwrap();
/// let item = Item::new("Laptop", 700, Category::Investment, 10, 10, 10).unwrap();
/// assert!((value_score(&item, &weights) - 10.0).abs() < 1e-9);
/// ```
pub fn value_score(item: &Item, weights: &Weights) -> f64 {
    f64::from(item.urgency) * weights.urgency()
        + f64::from(item.education) * weights.education()
        + f64::from(item.satisfaction) * weights.satisfaction()
}

/// Scores every item under the given weights, preserving input order.
///
/// Items are cloned into the result; the originals are left untouched.
/// Rescoring with the same weights yields identical values.
pub fn score_items(items: &[Item], weights: &Weights) -> Vec<ScoredItem> {
    items
        .iter()
        .map(|item| ScoredItem {
            item: item.clone(),
            score: value_score(item, weights),
        })
        .collect()
}
