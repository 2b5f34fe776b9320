//! Multi-criteria budget selection toolkit.
//!
//! Scores candidate purchases against user-weighted criteria and selects
//! the subset that fits a fixed budget, using interchangeable solving
//! strategies:
//!
//! - **Greedy**: ratio heuristic (value score / cost) with stable
//!   descending order — fast, O(n log n), not guaranteed optimal.
//! - **Dynamic Programming**: exact 0/1 knapsack optimizer over an
//!   integer-indexed cost table — O(n·W) time and space, W = budget.
//!
//! # Architecture
//!
//! - [`scoring`]: the data model — items with three attribute ratings
//!   (urgency, education value, hedonic satisfaction), user preference
//!   weights, and the weighted-sum value score that collapses them into a
//!   single comparable number per item.
//! - [`strategy`]: the solving contract ([`strategy::Strategy`]) and its two
//!   implementations. Strategies consume pre-scored items and a budget and
//!   return a consistent selection.
//! - [`analysis`]: the orchestrator — computes scores once, filters
//!   ineligible items, runs every registered strategy, and packages each
//!   outcome with wall-clock timing into a solution record.
//!
//! This crate contains no I/O. Interactive prompting, report rendering, and
//! chart rendering belong to consumer layers: they supply validated
//! [`scoring::Item`]s, [`scoring::Weights`], and a budget, and consume the
//! returned [`analysis::Solution`] records.

pub mod analysis;
pub mod error;
pub mod scoring;
pub mod strategy;
