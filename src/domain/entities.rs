//! Domain entities: core data structures

use std::fmt;

use crate::domain::error::DomainError;

/// A named, weighted cat. Immutable once constructed.
///
/// Ordered by `(name, weight)`; this is the key the clowder tree sorts by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cat {
    name: String,
    weight: i32,
}

impl Cat {
    /// Validates and creates a cat.
    ///
    /// Fails fast on a blank name or a negative weight, so every
    /// constructed `Cat` is valid and downstream code never re-checks.
    pub fn new(name: impl Into<String>, weight: i32) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if weight < 0 {
            return Err(DomainError::NegativeWeight(weight));
        }
        Ok(Self { name, weight })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}kg)", self.name, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_name_is_rejected(#[case] name: &str) {
        assert_eq!(Cat::new(name, 4), Err(DomainError::EmptyName));
    }

    #[rstest]
    #[case(-1)]
    #[case(-100)]
    fn test_negative_weight_is_rejected(#[case] weight: i32) {
        assert_eq!(Cat::new("Tom", weight), Err(DomainError::NegativeWeight(weight)));
    }

    #[test]
    fn test_valid_cat_exposes_attributes() {
        let cat = Cat::new("Whiskers", 4).unwrap();

        assert_eq!(cat.name(), "Whiskers");
        assert_eq!(cat.weight(), 4);
        assert_eq!(cat.to_string(), "Whiskers (4kg)");
    }
}
