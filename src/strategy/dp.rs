//! Exact 0/1 knapsack optimizer.

use super::types::{Selection, Strategy};
use crate::scoring::ScoredItem;

/// Tolerance for the backtracking comparison.
///
/// Table entries are sums of `f64` scores, so "this row differs from the
/// previous one" must allow for accumulated rounding. Strict equality can
/// misreconstruct the selected set.
const RECONSTRUCT_EPSILON: f64 = 1e-9;

/// Exact 0/1 knapsack via dynamic programming.
///
/// Builds an (n+1) × (budget+1) table where `table[i][w]` holds the maximum
/// total value score achievable using only the first `i` items within
/// capacity `w`. The value dimension is the real-valued score; the cost
/// dimension is indexed over integer budget levels, which is what restricts
/// this strategy to integer costs and budgets. The selected subset is
/// recovered by walking the table back from `(n, budget)`.
///
/// Guaranteed optimal for the given scores. O(n·W) time and space,
/// W = budget; the table is allocated per call and dropped after
/// reconstruction. Callers wanting a responsiveness guarantee should bound
/// the budget before invoking this strategy.
///
/// # Examples
///
/// ```
/// use mcda_knapsack::scoring::{score_items, Category, Item, Weights};
/// use mcda_knapsack::strategy::{DynamicProgramming, Strategy};
///
/// let weights = Weights::default();
/// let items = vec![
///     Item::new("Laptop", 700, Category::Investment, 9, 10, 7).unwrap(),
///     Item::new("Desk", 300, Category::Necessity, 7, 4, 6).unwrap(),
/// ];
/// let scored = score_items(&items, &weights);
///
/// let selection = DynamicProgramming.solve(&scored, 1000);
/// assert_eq!(selection.total_cost, 1000);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl Strategy for DynamicProgramming {
    fn name(&self) -> &str {
        "DynamicProgramming"
    }

    fn solve(&self, items: &[ScoredItem], budget: u64) -> Selection {
        let n = items.len();
        let capacity = budget as usize;
        let mut table = vec![vec![0.0f64; capacity + 1]; n + 1];

        for i in 1..=n {
            let item = &items[i - 1];
            let cost = item.item.cost as usize;
            for w in 0..=capacity {
                table[i][w] = if cost <= w {
                    (item.score + table[i - 1][w - cost]).max(table[i - 1][w])
                } else {
                    table[i - 1][w]
                };
            }
        }

        let total_score = table[n][capacity];

        // Walk back from (n, budget): a row change means item i was taken.
        let mut picked = Vec::new();
        let mut w = capacity;
        for i in (1..=n).rev() {
            if (table[i][w] - table[i - 1][w]).abs() > RECONSTRUCT_EPSILON {
                let item = &items[i - 1];
                picked.push(item.clone());
                w -= item.item.cost as usize;
            }
        }
        picked.reverse();

        let total_cost = picked.iter().map(|s| s.item.cost).sum();
        Selection {
            items: picked,
            total_score,
            total_cost,
        }
    }
}
