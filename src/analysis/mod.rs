//! Analysis orchestration.
//!
//! The [`Analyzer`] owns one analysis run: the candidate items, the budget,
//! and the active preference weights. [`Analyzer::run`] scores every item,
//! drops the ones below the eligibility threshold, executes each registered
//! strategy on the surviving set, and returns one timed [`Solution`] record
//! per strategy, in registration order.
//!
//! Consumer layers (tables, charts, prompts) read the returned records;
//! nothing here renders anything.

mod analyzer;

pub use analyzer::{Analyzer, ItemStatus, Solution, ELIGIBILITY_THRESHOLD};
