//! # FORGE Economy
//!
//! The crafting dependency engine of FORGE.
//!
//! Items are either basic (freely available) or produced by recipes that
//! consume quantities of other items. The engine keeps the recipes as a
//! dependency graph and answers three questions about it:
//!
//! 1. **Reachability** - what can eventually be crafted from a pool of
//!    starting resources (quantity-gated)
//! 2. **Minimum cost** - how many crafting steps separate a basic set from a
//!    target item
//! 3. **Crafting path** - one concrete sequence of items to craft, from the
//!    basics up to the target
//!
//! ## Design Principles
//!
//! 1. **Owned state** - every call goes through an explicit [`CraftingSystem`]
//! 2. **Append-only** - items and recipes are added, never removed; the basic
//!    flag only ever turns on
//! 3. **Atomic registration** - a rejected recipe registers nothing
//! 4. **No answer is not an error** - unreachable targets are plain values
//! 5. **External configuration** - catalogs live in TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use forge_economy::CraftingCatalog;
//!
//! let system = CraftingCatalog::load("data/catalogs/armory.toml")?.build()?;
//! let basics = system.basic_items();
//! println!("{}", system.minimum_craft_cost("Iron Sword", &basics));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod cost;
pub mod cycle;
pub mod error;
pub mod graph;
pub mod item;
pub mod path;
pub mod reachability;
pub mod recipe;
pub mod system;
pub mod view;

pub use catalog::{CraftingCatalog, IngredientEntry, ItemEntry, RecipeEntry};
pub use cost::CraftCost;
pub use error::{CraftingError, CraftingResult};
pub use graph::DependencyGraph;
pub use item::{Item, ItemRegistry};
pub use reachability::Quantity;
pub use recipe::{Ingredient, Recipe, RecipeId, RecipeSet};
pub use system::CraftingSystem;
pub use view::AdjacencySnapshot;
