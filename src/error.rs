//! Error types for model construction.

use thiserror::Error;

/// Errors raised when constructing model values.
///
/// All variants are fail-fast: a failed constructor never yields a
/// partially-valid object. Solving itself has no error conditions — the
/// validated constructors and unsigned cost/budget types are the only way
/// to reach the strategies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Preference weights must sum to 1.0 within ±0.001.
    #[error("preference weights must sum to 1.0 (±0.001), got {sum}")]
    WeightSum {
        /// The offending sum.
        sum: f64,
    },

    /// Preference weights must be non-negative.
    #[error("preference weight must be non-negative, got {value}")]
    NegativeWeight {
        /// The offending weight.
        value: f64,
    },

    /// Category string did not name one of the fixed categories.
    #[error("unknown category `{0}` (expected Necessity, Investment, or Want)")]
    UnknownCategory(String),

    /// Item cost must be a positive integer.
    #[error("item `{name}` must have a positive cost")]
    ZeroCost {
        /// Name of the offending item.
        name: String,
    },

    /// Attribute ratings are on a 1-10 scale.
    #[error("attribute `{attribute}` of item `{name}` must be in 1..=10, got {value}")]
    AttributeRange {
        /// Name of the offending item.
        name: String,
        /// Which attribute was out of range.
        attribute: &'static str,
        /// The offending value.
        value: u8,
    },
}

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
