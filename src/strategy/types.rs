//! Core trait for selection strategies.

use crate::scoring::ScoredItem;

/// A budget-constrained subset-selection algorithm.
///
/// Implementations receive items whose value scores have already been
/// computed against the active preference weights, and must return a
/// consistent [`Selection`]:
///
/// - `total_cost <= budget`
/// - `total_score` is the summed score of the selected items
/// - `total_cost` is the summed cost of the selected items
/// - each input item is selected at most once (whole, single-unit items)
///
/// The display name is fixed per implementation and is used to label
/// solution records.
pub trait Strategy: Send + Sync {
    /// Returns the display name of this strategy.
    fn name(&self) -> &str;

    /// Selects a subset of `items` whose total cost fits within `budget`.
    fn solve(&self, items: &[ScoredItem], budget: u64) -> Selection;
}

/// The outcome of one strategy invocation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    /// Selected items, each carrying its score.
    pub items: Vec<ScoredItem>,
    /// Aggregate value score of the selected items.
    pub total_score: f64,
    /// Aggregate cost of the selected items.
    pub total_cost: u64,
}

impl Selection {
    /// An empty selection (nothing fits, or nothing was offered).
    pub fn empty() -> Self {
        Self::default()
    }
}
