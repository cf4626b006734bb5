//! # Crafting System
//!
//! The owned graph state every engine call goes through.
//!
//! `CraftingSystem` bundles the item registry, the recipe set and the
//! dependency graph derived from it. Mutation is append-only: items are
//! created or upgraded to basic, recipes are added. The searches borrow the
//! system immutably and are pure functions of its current state.
//!
//! ## Concurrency
//!
//! The system holds no locks. A caller sharing it between threads must
//! serialize `register_*` calls against searches itself, for instance behind
//! one `RwLock` or by swapping in a freshly built system per request.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::{HashMap, HashSet};
//! use forge_economy::{CraftCost, CraftingSystem};
//!
//! let mut system = CraftingSystem::new();
//! system.register_item("Wood", true).unwrap();
//! system.register_item("Iron", true).unwrap();
//! system.register_recipe("Plank", 4, &[("Wood", 1)]).unwrap();
//! system.register_recipe("Sword", 1, &[("Plank", 1), ("Iron", 1)]).unwrap();
//!
//! let basics: HashSet<String> = ["Wood", "Iron"].map(String::from).into();
//! // Iron feeds Sword directly, so one step is enough.
//! assert_eq!(system.minimum_craft_cost("Sword", &basics), CraftCost::Steps(1));
//! assert_eq!(system.crafting_path("Sword", &basics), Some(vec!["Plank".into(), "Sword".into()]));
//!
//! let pool: HashMap<String, u32> = [("Wood".to_string(), 1), ("Iron".to_string(), 1)].into();
//! assert_eq!(system.reachable_items(&pool).len(), 4);
//! ```

use std::collections::{HashMap, HashSet};

use crate::cost::{self, CraftCost};
use crate::cycle;
use crate::error::CraftingResult;
use crate::graph::DependencyGraph;
use crate::item::{Item, ItemRegistry};
use crate::path;
use crate::reachability;
use crate::recipe::{Recipe, RecipeId, RecipeSet};
use crate::view::{self, AdjacencySnapshot};

/// Item registry, recipe set and dependency graph, kept consistent.
#[derive(Clone, Debug, Default)]
pub struct CraftingSystem {
    items: ItemRegistry,
    recipes: RecipeSet,
    graph: DependencyGraph,
}

impl CraftingSystem {
    /// Creates an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item, or upgrades an existing one to basic.
    ///
    /// Calling this again with the same name never creates a second item and
    /// never turns a basic item back into a craftable one.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` if `name` is empty or whitespace only.
    pub fn register_item(&mut self, name: &str, is_basic: bool) -> CraftingResult<Item> {
        self.items.get_or_create(name, is_basic).cloned()
    }

    /// Registers a recipe producing `result_quantity` of `result`.
    ///
    /// The result and every ingredient are created as craftable items when
    /// missing. Nothing is registered if any name or quantity is invalid.
    ///
    /// # Errors
    ///
    /// - `EmptyName` for a blank result or ingredient name
    /// - `NonPositiveQuantity` for a zero or negative quantity
    /// - `QuantityTooLarge` for a quantity above `u32::MAX`
    /// - `EmptyIngredients` if `ingredients` is empty
    pub fn register_recipe<S: AsRef<str>>(
        &mut self,
        result: &str,
        result_quantity: i64,
        ingredients: &[(S, i64)],
    ) -> CraftingResult<RecipeId> {
        let recipe = Recipe::new(self.recipes.next_id(), result, result_quantity, ingredients)?;

        self.items.get_or_create(&recipe.result, false)?;
        for line in &recipe.ingredients {
            self.items.get_or_create(&line.item, false)?;
        }

        self.graph.link(&recipe);
        let recipe = self.recipes.push(recipe)?;
        tracing::debug!(
            "Registered recipe #{}: {} x{} <- {} ingredients",
            recipe.id,
            recipe.result,
            recipe.result_quantity,
            recipe.ingredients.len()
        );
        Ok(recipe.id)
    }

    /// Every item, sorted by name.
    #[must_use]
    pub fn list_items(&self) -> Vec<Item> {
        self.items.iter().cloned().collect()
    }

    /// Every recipe, in insertion order.
    #[must_use]
    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.recipes.iter().cloned().collect()
    }

    /// Looks up an item by exact name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Gets a recipe by id.
    #[must_use]
    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Recipes producing `name`, in insertion order.
    pub fn recipes_for<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.graph
            .producers(name)
            .iter()
            .filter_map(|&id| self.recipes.get(id))
    }

    /// Names of every basic item.
    #[must_use]
    pub fn basic_items(&self) -> HashSet<String> {
        self.items.basic_names().map(str::to_owned).collect()
    }

    /// Number of registered items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of registered recipes.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// The derived adjacency views.
    #[must_use]
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Items obtainable from `starting` resource quantities.
    #[must_use]
    pub fn reachable_items(&self, starting: &HashMap<String, u32>) -> HashSet<String> {
        reachability::reachable_items(&self.graph, &self.recipes, starting)
    }

    /// Minimum crafting steps from `basics` to `target`.
    #[must_use]
    pub fn minimum_craft_cost(&self, target: &str, basics: &HashSet<String>) -> CraftCost {
        cost::minimum_craft_cost(&self.graph, target, basics)
    }

    /// Step distance from `basics` to every item with a finite cost.
    #[must_use]
    pub fn craft_distances(&self, basics: &HashSet<String>) -> HashMap<String, u32> {
        cost::craft_distances(&self.graph, basics)
    }

    /// One crafting path from `basics` to `target`, basics side first.
    #[must_use]
    pub fn crafting_path(&self, target: &str, basics: &HashSet<String>) -> Option<Vec<String>> {
        path::crafting_path(&self.graph, &self.recipes, target, basics)
    }

    /// Returns `true` if the forward view contains a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// One cycle of the forward view, first item repeated at the end.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        cycle::find_cycle(&self.graph, self.items.iter().map(|item| item.name.as_str()))
    }

    /// Read-only adjacency view with summary counts.
    #[must_use]
    pub fn adjacency_snapshot(&self) -> AdjacencySnapshot {
        AdjacencySnapshot::capture(&self.items, &self.graph)
    }

    /// Every `(ingredient, result)` pair, one per ingredient line.
    #[must_use]
    pub fn graph_edges(&self) -> Vec<(String, String)> {
        view::graph_edges(&self.recipes)
    }

    /// Renders the graph as a Graphviz document.
    #[must_use]
    pub fn to_dot(&self) -> String {
        view::render_dot(&self.items, &self.graph)
    }
}
