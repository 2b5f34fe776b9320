//! User preference weights.

use crate::error::ModelError;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// User preference weights over the three scoring criteria.
///
/// The three weights must be non-negative and sum to 1.0 within
/// [`WEIGHT_SUM_TOLERANCE`]. The invariant is enforced at construction;
/// fields are private so a validated value can never drift out of range.
/// With the sum pinned to 1, every value score of attributes in [1, 10]
/// lands in [1, 10] as well, which keeps the eligibility threshold
/// meaningful across preference profiles.
///
/// # Examples
///
/// ```
/// use mcda_knapsack::scoring::Weights;
///
/// let weights = Weights::new(0.5, 0.3, 0.2).unwrap();
/// assert!((weights.urgency() - 0.5).abs() < 1e-12);
///
/// assert!(Weights::new(0.5, 0.5, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Weights {
    urgency: f64,
    education: f64,
    satisfaction: f64,
}

impl Weights {
    /// Creates validated preference weights.
    ///
    /// Fails with [`ModelError::NegativeWeight`] if any component is
    /// negative, or [`ModelError::WeightSum`] if the sum is outside
    /// `1.0 ± WEIGHT_SUM_TOLERANCE`.
    pub fn new(urgency: f64, education: f64, satisfaction: f64) -> Result<Self, ModelError> {
        for value in [urgency, education, satisfaction] {
            if value < 0.0 {
                return Err(ModelError::NegativeWeight { value });
            }
        }
        let sum = urgency + education + satisfaction;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ModelError::WeightSum { sum });
        }
        Ok(Self {
            urgency,
            education,
            satisfaction,
        })
    }

    /// Weight applied to an item's urgency rating.
    pub fn urgency(&self) -> f64 {
        self.urgency
    }

    /// Weight applied to an item's education-value rating.
    pub fn education(&self) -> f64 {
        self.education
    }

    /// Weight applied to an item's hedonic-satisfaction rating.
    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }
}

impl Default for Weights {
    /// Urgency-leaning default profile: 0.5 / 0.3 / 0.2.
    fn default() -> Self {
        Self {
            urgency: 0.5,
            education: 0.3,
            satisfaction: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_weights() {
        let weights = Weights::new(0.5, 0.3, 0.2).unwrap();
        assert!((weights.urgency() - 0.5).abs() < 1e-12);
        assert!((weights.education() - 0.3).abs() < 1e-12);
        assert!((weights.satisfaction() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_sum_within_tolerance_accepted() {
        assert!(Weights::new(0.3334, 0.3333, 0.3333).is_ok());
        assert!(Weights::new(0.5005, 0.3, 0.2).is_ok());
        assert!(Weights::new(0.4995, 0.3, 0.2).is_ok());
    }

    #[test]
    fn test_sum_outside_tolerance_rejected() {
        assert!(matches!(
            Weights::new(0.5, 0.3, 0.3),
            Err(ModelError::WeightSum { .. })
        ));
        assert!(matches!(
            Weights::new(0.4, 0.3, 0.2),
            Err(ModelError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(matches!(
            Weights::new(-0.1, 0.6, 0.5),
            Err(ModelError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_degenerate_single_criterion() {
        // All weight on one criterion is a valid profile.
        let weights = Weights::new(1.0, 0.0, 0.0).unwrap();
        assert!((weights.urgency() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_satisfies_invariant() {
        let weights = Weights::default();
        let sum = weights.urgency() + weights.education() + weights.satisfaction();
        assert!((sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_construction_idempotent() {
        let a = Weights::new(0.5, 0.3, 0.2).unwrap();
        let b = Weights::new(0.5, 0.3, 0.2).unwrap();
        assert_eq!(a, b);
    }
}
