//! Greedy ratio heuristic.

use super::types::{Selection, Strategy};
use crate::scoring::ScoredItem;
use std::cmp::Ordering;

/// Greedy knapsack heuristic ordered by score/cost ratio.
///
/// Items are sorted by `score / cost` descending and accepted front to back
/// while they still fit the remaining budget; items that do not fit are
/// skipped, never revisited. The sort is stable, so items with equal ratios
/// keep their input order and the output is fully deterministic.
///
/// Runs in O(n log n). Not guaranteed optimal: a single high-ratio item can
/// displace a pair of items whose combined score is higher.
///
/// # Examples
///
/// ```
/// use mcda_knapsack::scoring::{score_items, Category, Item, Weights};
/// use mcda_knapsack::strategy::{Greedy, Strategy};
///
/// let weights = Weights::default();
/// let items = vec![
///     Item::new("Laptop", 700, Category::Investment, 9, 10, 7).unwrap(),
///     Item::new("Headphones", 150, Category::Want, 6, 5, 9).unwrap(),
/// ];
/// let scored = score_items(&items, &weights);
///
/// let selection = Greedy.solve(&scored, 800);
/// assert!(selection.total_cost <= 800);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    /// Score-per-cost ratio, guarding the zero-cost case.
    ///
    /// A validated [`Item`](crate::scoring::Item) always has positive cost,
    /// but the ratio must not fault if a caller hands one in by other means.
    fn ratio(item: &ScoredItem) -> f64 {
        if item.item.cost == 0 {
            f64::INFINITY
        } else {
            item.score / item.item.cost as f64
        }
    }
}

impl Strategy for Greedy {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn solve(&self, items: &[ScoredItem], budget: u64) -> Selection {
        let ratios: Vec<f64> = items.iter().map(Self::ratio).collect();

        let mut order: Vec<usize> = (0..items.len()).collect();
        // Stable sort: equal ratios preserve input order.
        order.sort_by(|&a, &b| {
            ratios[b]
                .partial_cmp(&ratios[a])
                .unwrap_or(Ordering::Equal)
        });

        let mut selection = Selection::empty();
        for index in order {
            let candidate = &items[index];
            if selection.total_cost + candidate.item.cost <= budget {
                selection.total_score += candidate.score;
                selection.total_cost += candidate.item.cost;
                selection.items.push(candidate.clone());
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Category, Item};

    fn scored(name: &str, cost: u64, score: f64) -> ScoredItem {
        ScoredItem {
            item: Item::new(name, cost, Category::Want, 5, 5, 5).unwrap(),
            score,
        }
    }

    #[test]
    fn test_takes_best_ratio_first() {
        // Two items of equal cost where only one fits: ratio ordering must
        // pick the higher-scoring one and skip the other.
        let items = vec![scored("worse", 60, 7.0), scored("better", 60, 8.0)];
        let selection = Greedy.solve(&items, 100);

        assert_eq!(selection.items.len(), 1);
        assert_eq!(selection.items[0].item.name, "better");
        assert_eq!(selection.total_cost, 60);
        assert!((selection.total_score - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_skips_and_continues() {
        // Best-ratio item fills most of the budget; the next one is too
        // big, but the one after still fits and must be taken.
        let items = vec![
            scored("big", 80, 9.6),    // ratio 0.12
            scored("medium", 40, 4.0), // ratio 0.10, does not fit after big
            scored("small", 20, 1.8),  // ratio 0.09, fits
        ];
        let selection = Greedy.solve(&items, 100);

        let names: Vec<&str> = selection.items.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["big", "small"]);
        assert_eq!(selection.total_cost, 100);
    }

    #[test]
    fn test_equal_ratios_preserve_input_order() {
        // Identical ratio 0.1; stable sort keeps input order, so the first
        // two fill the budget.
        let items = vec![
            scored("first", 50, 5.0),
            scored("second", 50, 5.0),
            scored("third", 50, 5.0),
        ];
        let selection = Greedy.solve(&items, 100);

        let names: Vec<&str> = selection.items.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_zero_budget_selects_nothing() {
        let items = vec![scored("a", 10, 9.0), scored("b", 20, 8.0)];
        let selection = Greedy.solve(&items, 0);

        assert!(selection.items.is_empty());
        assert_eq!(selection.total_cost, 0);
        assert_eq!(selection.total_score, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let selection = Greedy.solve(&[], 100);
        assert!(selection.items.is_empty());
        assert_eq!(selection.total_cost, 0);
    }

    #[test]
    fn test_zero_cost_ratio_is_infinite() {
        assert_eq!(Greedy::ratio(&scored("a", 1, 5.0)), 5.0);
        let mut free = scored("free", 1, 5.0);
        free.item.cost = 0;
        assert_eq!(Greedy::ratio(&free), f64::INFINITY);
    }

    #[test]
    fn test_totals_match_selected_items() {
        let items = vec![
            scored("a", 30, 6.0),
            scored("b", 45, 7.5),
            scored("c", 25, 5.5),
            scored("d", 60, 6.2),
        ];
        let selection = Greedy.solve(&items, 100);

        let cost: u64 = selection.items.iter().map(|s| s.item.cost).sum();
        let score: f64 = selection.items.iter().map(|s| s.score).sum();
        assert_eq!(selection.total_cost, cost);
        assert!((selection.total_score - score).abs() < 1e-9);
        assert!(selection.total_cost <= 100);
    }
}
