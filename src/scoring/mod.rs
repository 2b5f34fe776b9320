//! Multi-criteria scoring model.
//!
//! Candidate purchases carry three attribute ratings on a 1-10 scale:
//! urgency, education value, and hedonic satisfaction. User preference
//! weights collapse the three into a single comparable **value score** per
//! item via a weighted sum.
//!
//! Scoring is an explicit two-phase flow: [`Item`] is an immutable record of
//! raw attributes, and [`score_items`] pairs each item with its computed
//! score in a [`ScoredItem`]. Items are never mutated by scoring, so
//! recomputing under the same weights always yields the same values.
//!
//! # Key Components
//!
//! - [`Weights`] — validated preference weights (non-negative, summing
//!   to 1.0 within ±0.001)
//! - [`Category`], [`Item`] — the candidate model with validated
//!   construction
//! - [`value_score`], [`score_items`], [`ScoredItem`] — the scoring phase

mod item;
mod score;
mod weights;

pub use item::{Category, Item};
pub use score::{score_items, value_score, ScoredItem};
pub use weights::{Weights, WEIGHT_SUM_TOLERANCE};
