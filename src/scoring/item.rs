//! Candidate purchase model.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Spending category of a candidate purchase.
///
/// The set is closed: prompting layers present exactly these three choices
/// (see [`Category::ALL`]) and parse free-text input via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Day-to-day essentials.
    Necessity,
    /// Purchases expected to pay off later (tools, courses, equipment).
    Investment,
    /// Discretionary, purely-for-pleasure purchases.
    Want,
}

impl Category {
    /// The fixed category set, in presentation order.
    pub const ALL: [Category; 3] = [Category::Necessity, Category::Investment, Category::Want];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Necessity => "Necessity",
            Category::Investment => "Investment",
            Category::Want => "Want",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Necessity" => Ok(Category::Necessity),
            "Investment" => Ok(Category::Investment),
            "Want" => Ok(Category::Want),
            other => Err(ModelError::UnknownCategory(other.to_string())),
        }
    }
}

/// A candidate purchase with multi-criteria attribute ratings.
///
/// Immutable once constructed: [`Item::new`] validates the cost and the
/// three attribute ratings, and scoring never writes back into the item
/// (see [`score_items`](super::score_items)). Names are free text and not
/// required to be unique.
///
/// # Examples
///
/// ```
/// use mcda_knapsack::scoring::{Category, Item};
///
/// let laptop = Item::new("Laptop", 700, Category::Investment, 9, 10, 7).unwrap();
/// assert_eq!(laptop.cost, 700);
///
/// // Ratings outside 1..=10 fail construction.
/// assert!(Item::new("Laptop", 700, Category::Investment, 0, 10, 7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    /// Display name (free text).
    pub name: String,
    /// Purchase cost, a positive integer in the caller's currency unit.
    pub cost: u64,
    /// Spending category.
    pub category: Category,
    /// How pressing the purchase is, 1-10.
    pub urgency: u8,
    /// Education / career value, 1-10.
    pub education: u8,
    /// Short-term hedonic satisfaction, 1-10.
    pub satisfaction: u8,
}

impl Item {
    /// Creates a validated item.
    ///
    /// Fails with [`ModelError::ZeroCost`] on a zero cost and
    /// [`ModelError::AttributeRange`] on any rating outside `1..=10`.
    pub fn new(
        name: impl Into<String>,
        cost: u64,
        category: Category,
        urgency: u8,
        education: u8,
        satisfaction: u8,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if cost == 0 {
            return Err(ModelError::ZeroCost { name });
        }
        for (attribute, value) in [
            ("urgency", urgency),
            ("education", education),
            ("satisfaction", satisfaction),
        ] {
            if !(1..=10).contains(&value) {
                return Err(ModelError::AttributeRange {
                    name,
                    attribute,
                    value,
                });
            }
        }
        Ok(Self {
            name,
            cost,
            category,
            urgency,
            education,
            satisfaction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let item = Item::new("Textbook", 120, Category::Necessity, 8, 9, 3).unwrap();
        assert_eq!(item.name, "Textbook");
        assert_eq!(item.cost, 120);
        assert_eq!(item.category, Category::Necessity);
    }

    #[test]
    fn test_zero_cost_rejected() {
        let err = Item::new("Freebie", 0, Category::Want, 5, 5, 5).unwrap_err();
        assert!(matches!(err, ModelError::ZeroCost { .. }));
    }

    #[test]
    fn test_attribute_out_of_range_rejected() {
        let low = Item::new("A", 10, Category::Want, 0, 5, 5).unwrap_err();
        assert!(matches!(
            low,
            ModelError::AttributeRange {
                attribute: "urgency",
                value: 0,
                ..
            }
        ));

        let high = Item::new("B", 10, Category::Want, 5, 5, 11).unwrap_err();
        assert!(matches!(
            high,
            ModelError::AttributeRange {
                attribute: "satisfaction",
                value: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_category_parse_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "Luxury".parse::<Category>().unwrap_err();
        assert_eq!(err, ModelError::UnknownCategory("Luxury".to_string()));
    }
}
