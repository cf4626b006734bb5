//! # Recipe Set
//!
//! Ordered collection of crafting recipes.
//!
//! A recipe consumes a list of ingredient quantities and produces one result
//! item. Several recipes may produce the same item; all of them are kept, in
//! insertion order. Recipes are validated in full before anything is
//! registered, so a rejected recipe leaves no trace behind.
//!
//! ## Example
//!
//! ```rust
//! use forge_economy::recipe::Recipe;
//!
//! let recipe = Recipe::new(0, "Sword", 1, &[("Plank", 1), ("Iron", 1)]).unwrap();
//! assert_eq!(recipe.ingredients.len(), 2);
//! assert_eq!(recipe.result, "Sword");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CraftingError, CraftingResult};
use crate::item::normalize_name;

/// Unique identifier for a recipe: its position in the recipe set.
pub type RecipeId = usize;

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Normalized item name.
    pub item: String,
    /// Quantity consumed.
    pub quantity: u32,
}

impl Ingredient {
    /// Creates a new ingredient line.
    #[inline]
    #[must_use]
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self { item: item.into(), quantity }
    }
}

/// A crafting recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Position in the recipe set.
    pub id: RecipeId,
    /// Name of the produced item.
    pub result: String,
    /// Units produced per craft.
    pub result_quantity: u32,
    /// Ingredients, unique per item, in declaration order.
    pub ingredients: Vec<Ingredient>,
}

/// Checks that `quantity` is a positive integer that fits a `u32`.
///
/// # Errors
///
/// Returns [`CraftingError::NonPositiveQuantity`] for zero or negative values
/// and [`CraftingError::QuantityTooLarge`] for values above `u32::MAX`.
pub fn positive_quantity(item: &str, quantity: i64) -> CraftingResult<u32> {
    if quantity <= 0 {
        return Err(CraftingError::NonPositiveQuantity { item: item.to_owned(), quantity });
    }
    u32::try_from(quantity)
        .map_err(|_| CraftingError::QuantityTooLarge { item: item.to_owned(), quantity })
}

impl Recipe {
    /// Builds a recipe, validating every name and quantity.
    ///
    /// Names are normalized. When an ingredient item is listed twice the
    /// later quantity replaces the earlier one in place.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the result or any ingredient name is blank
    /// - `NonPositiveQuantity` if any quantity is zero or negative
    /// - `QuantityTooLarge` if any quantity exceeds `u32::MAX`
    /// - `EmptyIngredients` if `ingredients` is empty
    pub fn new<S: AsRef<str>>(
        id: RecipeId,
        result: &str,
        result_quantity: i64,
        ingredients: &[(S, i64)],
    ) -> CraftingResult<Self> {
        let result = normalize_name(result)?;
        let result_quantity = positive_quantity(result, result_quantity)?;

        if ingredients.is_empty() {
            return Err(CraftingError::EmptyIngredients { result: result.to_owned() });
        }

        let mut lines: Vec<Ingredient> = Vec::with_capacity(ingredients.len());
        for (name, quantity) in ingredients {
            let name = normalize_name(name.as_ref())?;
            let quantity = positive_quantity(name, *quantity)?;

            if let Some(existing) = lines.iter_mut().find(|line| line.item == name) {
                tracing::warn!(
                    "Recipe for '{}' lists '{}' twice, keeping quantity {}",
                    result,
                    name,
                    quantity
                );
                existing.quantity = quantity;
            } else {
                lines.push(Ingredient::new(name, quantity));
            }
        }

        Ok(Self {
            id,
            result: result.to_owned(),
            result_quantity,
            ingredients: lines,
        })
    }

    /// Returns `true` if `available` accepts every ingredient line.
    pub fn is_satisfied_by<F>(&self, available: F) -> bool
    where
        F: FnMut(&Ingredient) -> bool,
    {
        self.ingredients.iter().all(available)
    }
}

/// Append-only, insertion-ordered collection of recipes.
#[derive(Clone, Debug, Default)]
pub struct RecipeSet {
    recipes: Vec<Recipe>,
}

impl RecipeSet {
    /// Creates an empty recipe set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next pushed recipe will receive.
    #[must_use]
    pub fn next_id(&self) -> RecipeId {
        self.recipes.len()
    }

    /// Appends a recipe built with [`RecipeSet::next_id`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the recipe id does not match its position.
    pub fn push(&mut self, recipe: Recipe) -> CraftingResult<&Recipe> {
        if recipe.id != self.recipes.len() {
            return Err(CraftingError::InvalidConfig(format!(
                "recipe id {} does not match slot {}",
                recipe.id,
                self.recipes.len()
            )));
        }
        self.recipes.push(recipe);
        Ok(&self.recipes[self.recipes.len() - 1])
    }

    /// Gets a recipe by id.
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Iterates recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Returns the number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if no recipe was added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
