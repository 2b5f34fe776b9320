//! Analysis runner.

use crate::scoring::{score_items, Item, ScoredItem, Weights};
use crate::strategy::Strategy;
use std::time::{Duration, Instant};

/// Minimum value score an item needs to be considered by any strategy.
///
/// Items scoring below this are dropped before solving — they never appear
/// in any solution's selected set.
pub const ELIGIBILITY_THRESHOLD: f64 = 5.0;

/// Immutable result of one strategy run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Display name of the strategy that produced this solution.
    pub strategy: String,
    /// Selected items, each carrying its value score.
    pub items: Vec<ScoredItem>,
    /// Aggregate value score of the selected items.
    pub total_score: f64,
    /// Aggregate cost of the selected items.
    pub total_cost: u64,
    /// Wall-clock time spent inside the strategy's `solve` call.
    pub elapsed: Duration,
}

/// How a candidate relates to one solution.
///
/// Drives downstream shopping-list rendering: every candidate is either
/// rejected outright by the eligibility filter, selected by the strategy,
/// or eligible but deferred for lack of budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ItemStatus {
    /// Value score below [`ELIGIBILITY_THRESHOLD`]; never offered to
    /// strategies.
    Rejected,
    /// Part of this solution's selected set.
    Selected,
    /// Eligible but not selected within the budget.
    Deferred,
}

impl Solution {
    /// Classifies a candidate relative to this solution.
    ///
    /// Membership is matched by item name, as downstream lists are keyed by
    /// name; duplicate names classify alike.
    pub fn status_of(&self, candidate: &ScoredItem) -> ItemStatus {
        if candidate.score < ELIGIBILITY_THRESHOLD {
            ItemStatus::Rejected
        } else if self
            .items
            .iter()
            .any(|selected| selected.item.name == candidate.item.name)
        {
            ItemStatus::Selected
        } else {
            ItemStatus::Deferred
        }
    }
}

/// Orchestrates one comparative analysis run.
///
/// Owns the candidate items, the budget, and the preference weights, plus
/// the strategies registered for comparison. Strategies run sequentially in
/// registration order; each invocation is timed with [`Instant`].
///
/// # Examples
///
/// ```
/// use mcda_knapsack::analysis::Analyzer;
/// use mcda_knapsack::scoring::{Category, Item, Weights};
/// use mcda_knapsack::strategy::{DynamicProgramming, Greedy};
///
/// let items = vec![
///     Item::new("Laptop", 700, Category::Investment, 9, 10, 7).unwrap(),
///     Item::new("Game", 60, Category::Want, 2, 1, 9).unwrap(),
/// ];
/// let analyzer = Analyzer::new(items, 750, Weights::default())
///     .with_strategy(Greedy)
///     .with_strategy(DynamicProgramming);
///
/// let solutions = analyzer.run();
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[0].strategy, "Greedy");
/// ```
pub struct Analyzer {
    items: Vec<Item>,
    budget: u64,
    weights: Weights,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Analyzer {
    /// Creates an analyzer for the given candidates, budget, and weights.
    pub fn new(items: Vec<Item>, budget: u64, weights: Weights) -> Self {
        Self {
            items,
            budget,
            weights,
            strategies: Vec::new(),
        }
    }

    /// Registers a strategy. Strategies run in registration order.
    pub fn with_strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Returns the registered strategy names in order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Scores all candidates under the current weights.
    ///
    /// Exposed so reporting layers can show per-item scores (including the
    /// rejected ones) alongside the solutions.
    pub fn scored_items(&self) -> Vec<ScoredItem> {
        score_items(&self.items, &self.weights)
    }

    /// Runs every registered strategy and returns one solution per strategy.
    ///
    /// Scores are recomputed from the immutable items on every call, so
    /// re-running with unchanged state yields identical scores and costs
    /// (timing aside).
    pub fn run(&self) -> Vec<Solution> {
        let eligible: Vec<ScoredItem> = self
            .scored_items()
            .into_iter()
            .filter(|scored| scored.score >= ELIGIBILITY_THRESHOLD)
            .collect();

        tracing::debug!(
            candidates = self.items.len(),
            eligible = eligible.len(),
            budget = self.budget,
            "starting analysis"
        );

        self.strategies
            .iter()
            .map(|strategy| {
                let started = Instant::now();
                let selection = strategy.solve(&eligible, self.budget);
                let elapsed = started.elapsed();

                tracing::debug!(
                    strategy = strategy.name(),
                    selected = selection.items.len(),
                    total_score = selection.total_score,
                    total_cost = selection.total_cost,
                    ?elapsed,
                    "strategy finished"
                );

                Solution {
                    strategy: strategy.name().to_string(),
                    items: selection.items,
                    total_score: selection.total_score,
                    total_cost: selection.total_cost,
                    elapsed,
                }
            })
            .collect()
    }
}
