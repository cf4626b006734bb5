//! # Crafting Catalogs
//!
//! External TOML description of items and recipes, loaded once at startup.
//!
//! ```toml
//! [[items]]
//! name = "Wood"
//! basic = true
//!
//! [[recipes]]
//! result = "Plank"
//! quantity = 4
//! ingredients = [{ item = "Wood", quantity = 1 }]
//! ```
//!
//! `basic` defaults to `false`, every `quantity` defaults to 1. Items are
//! registered first, in file order, then recipes. The first invalid entry
//! aborts the load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CraftingError, CraftingResult};
use crate::system::CraftingSystem;

const fn one() -> i64 {
    1
}

/// An explicitly declared item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemEntry {
    /// Item name.
    pub name: String,
    /// Whether the item is freely obtainable.
    #[serde(default)]
    pub basic: bool,
}

/// One ingredient line of a catalog recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientEntry {
    /// Ingredient item name.
    pub item: String,
    /// Quantity consumed.
    #[serde(default = "one")]
    pub quantity: i64,
}

/// A catalog recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeEntry {
    /// Produced item name.
    pub result: String,
    /// Units produced per craft.
    #[serde(default = "one")]
    pub quantity: i64,
    /// Ingredients consumed.
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
}

/// A full crafting catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CraftingCatalog {
    /// Declared items.
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    /// Declared recipes.
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}

impl CraftingCatalog {
    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not a valid catalog.
    pub fn from_toml_str(text: &str) -> CraftingResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `InvalidConfig` if it
    /// cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> CraftingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&text)?;
        tracing::info!(
            "Loaded catalog {}: {} items, {} recipes",
            path.display(),
            catalog.items.len(),
            catalog.recipes.len()
        );
        Ok(catalog)
    }

    /// Serializes the catalog back to TOML.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if serialization fails.
    pub fn to_toml_string(&self) -> CraftingResult<String> {
        toml::to_string_pretty(self).map_err(|err| CraftingError::InvalidConfig(err.to_string()))
    }

    /// Registers every item and recipe into a fresh system.
    ///
    /// # Errors
    ///
    /// Returns the engine error of the first invalid item or recipe.
    pub fn build(&self) -> CraftingResult<CraftingSystem> {
        let mut system = CraftingSystem::new();
        self.apply(&mut system)?;
        Ok(system)
    }

    /// Registers every item and recipe into an existing system.
    ///
    /// # Errors
    ///
    /// Returns the engine error of the first invalid item or recipe. Entries
    /// before it stay registered.
    pub fn apply(&self, system: &mut CraftingSystem) -> CraftingResult<()> {
        for item in &self.items {
            system.register_item(&item.name, item.basic)?;
        }
        for recipe in &self.recipes {
            let ingredients: Vec<(&str, i64)> = recipe
                .ingredients
                .iter()
                .map(|line| (line.item.as_str(), line.quantity))
                .collect();
            system.register_recipe(&recipe.result, recipe.quantity, &ingredients)?;
        }
        Ok(())
    }
}

impl CraftingSystem {
    /// Exports the current items and recipes as a catalog.
    #[must_use]
    pub fn to_catalog(&self) -> CraftingCatalog {
        CraftingCatalog {
            items: self
                .list_items()
                .into_iter()
                .map(|item| ItemEntry { name: item.name, basic: item.is_basic })
                .collect(),
            recipes: self
                .list_recipes()
                .into_iter()
                .map(|recipe| RecipeEntry {
                    result: recipe.result,
                    quantity: i64::from(recipe.result_quantity),
                    ingredients: recipe
                        .ingredients
                        .into_iter()
                        .map(|line| IngredientEntry {
                            item: line.item,
                            quantity: i64::from(line.quantity),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
