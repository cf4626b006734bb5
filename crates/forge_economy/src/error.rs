//! # Crafting Error Types
//!
//! All errors that can occur in the crafting engine.
//!
//! "No answer" outcomes of the searches (unreachable target, missing path,
//! empty reachable set) are ordinary values and never appear here.

use thiserror::Error;

/// Errors that can occur in the crafting engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CraftingError {
    /// An item name was empty or whitespace only.
    #[error("invalid input: item name must not be empty")]
    EmptyName,

    /// A recipe was declared without any ingredient.
    #[error("invalid input: recipe for {result} has no ingredients")]
    EmptyIngredients {
        /// The item the recipe would produce.
        result: String,
    },

    /// A result or ingredient quantity was zero or negative.
    #[error("invalid input: quantity {quantity} for item {item} must be positive")]
    NonPositiveQuantity {
        /// The item the quantity was attached to.
        item: String,
        /// The rejected quantity.
        quantity: i64,
    },

    /// A quantity does not fit the engine's `u32` storage.
    #[error("invalid input: quantity {quantity} for item {item} is too large")]
    QuantityTooLarge {
        /// The item the quantity was attached to.
        item: String,
        /// The rejected quantity.
        quantity: i64,
    },

    /// Invalid catalog file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog file could not be read.
    #[error("catalog i/o failed: {0}")]
    Io(String),
}

impl CraftingError {
    /// Returns `true` for the malformed-input family (bad name, bad quantity,
    /// empty ingredient list).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::EmptyIngredients { .. }
                | Self::NonPositiveQuantity { .. }
                | Self::QuantityTooLarge { .. }
        )
    }
}

impl From<std::io::Error> for CraftingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CraftingError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for crafting operations.
pub type CraftingResult<T> = Result<T, CraftingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_family() {
        assert!(CraftingError::EmptyName.is_invalid_input());
        assert!(CraftingError::EmptyIngredients { result: "Sword".into() }.is_invalid_input());
        assert!(CraftingError::NonPositiveQuantity { item: "Wood".into(), quantity: 0 }
            .is_invalid_input());
        assert!(CraftingError::QuantityTooLarge { item: "Wood".into(), quantity: 1 << 40 }
            .is_invalid_input());
        assert!(!CraftingError::InvalidConfig("bad".into()).is_invalid_input());
        assert!(!CraftingError::Io("gone".into()).is_invalid_input());
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = CraftingError::NonPositiveQuantity { item: "Iron".into(), quantity: -2 };
        assert_eq!(err.to_string(), "invalid input: quantity -2 for item Iron must be positive");
    }
}
