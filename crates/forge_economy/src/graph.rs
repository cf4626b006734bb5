//! # Dependency Graph
//!
//! Two adjacency views derived from the recipe set:
//!
//! - **forward**: ingredient -> items it helps produce (deduplicated, in
//!   first-seen order)
//! - **reverse**: produced item -> recipes producing it (every alternative
//!   kept, in insertion order)
//!
//! Both views are updated together by [`DependencyGraph::link`], once per
//! added recipe, so they always project the same recipe set.

use std::collections::HashMap;

use crate::recipe::{Recipe, RecipeId};

/// Forward and reverse adjacency over item names.
#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    /// Ingredient name -> names of items it is used to craft.
    successors: HashMap<String, Vec<String>>,
    /// Produced item name -> recipes that produce it.
    producers: HashMap<String, Vec<RecipeId>>,
    /// Number of distinct forward edges.
    edge_count: usize,
}

impl DependencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds both views from scratch.
    pub fn from_recipes<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Self {
        let mut graph = Self::new();
        for recipe in recipes {
            graph.link(recipe);
        }
        graph
    }

    /// Links one recipe into both views.
    ///
    /// An ingredient -> result edge that already exists is left untouched;
    /// the recipe itself is always appended to the reverse view.
    pub fn link(&mut self, recipe: &Recipe) {
        self.producers
            .entry(recipe.result.clone())
            .or_default()
            .push(recipe.id);

        for line in &recipe.ingredients {
            let targets = self.successors.entry(line.item.clone()).or_default();
            if !targets.contains(&recipe.result) {
                targets.push(recipe.result.clone());
                self.edge_count += 1;
            }
        }
    }

    /// Items craftable with `item` as an ingredient.
    #[must_use]
    pub fn successors(&self, item: &str) -> &[String] {
        self.successors.get(item).map(Vec::as_slice).unwrap_or_default()
    }

    /// Recipes producing `item`, in insertion order.
    #[must_use]
    pub fn producers(&self, item: &str) -> &[RecipeId] {
        self.producers.get(item).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct items `item` leads to.
    #[must_use]
    pub fn out_degree(&self, item: &str) -> usize {
        self.successors(item).len()
    }

    /// Number of distinct forward edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
