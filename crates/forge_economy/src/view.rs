//! # Diagnostic Views
//!
//! Read-only renderings of the dependency graph for collaborators: an
//! adjacency snapshot with summary counts, the raw ingredient -> result edge
//! list, and a Graphviz DOT document.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;
use crate::item::ItemRegistry;
use crate::recipe::RecipeSet;

/// DOT fill color of basic items.
pub const BASIC_COLOR: &str = "lightgreen";
/// DOT fill color of craftable items.
pub const CRAFTABLE_COLOR: &str = "lightblue";

/// Forward adjacency of every registered item plus summary counts.
///
/// All maps are keyed by item name and sorted. Counts are taken over the
/// deduplicated forward view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencySnapshot {
    /// Item -> items it is used to craft.
    pub adjacency: BTreeMap<String, Vec<String>>,
    /// Number of registered items.
    pub vertex_count: usize,
    /// Number of distinct ingredient -> result edges.
    pub edge_count: usize,
    /// Distinct predecessors per item.
    pub in_degree: BTreeMap<String, usize>,
    /// Distinct successors per item.
    pub out_degree: BTreeMap<String, usize>,
    /// Basic flag per item.
    pub basic: BTreeMap<String, bool>,
}

impl AdjacencySnapshot {
    /// Captures the current state of `graph` over every item in `registry`.
    #[must_use]
    pub fn capture(registry: &ItemRegistry, graph: &DependencyGraph) -> Self {
        let mut adjacency = BTreeMap::new();
        let mut in_degree: BTreeMap<String, usize> = BTreeMap::new();
        let mut out_degree = BTreeMap::new();
        let mut basic = BTreeMap::new();

        for item in registry.iter() {
            in_degree.entry(item.name.clone()).or_insert(0);
            let successors = graph.successors(&item.name);
            for next in successors {
                *in_degree.entry(next.clone()).or_insert(0) += 1;
            }
            adjacency.insert(item.name.clone(), successors.to_vec());
            out_degree.insert(item.name.clone(), graph.out_degree(&item.name));
            basic.insert(item.name.clone(), item.is_basic);
        }

        Self {
            adjacency,
            vertex_count: registry.len(),
            edge_count: graph.edge_count(),
            in_degree,
            out_degree,
            basic,
        }
    }
}

/// Every `(ingredient, result)` pair, one per recipe ingredient line.
///
/// Unlike the forward view this list is not deduplicated: two recipes
/// sharing an ingredient -> result pair contribute two entries.
#[must_use]
pub fn graph_edges(recipes: &RecipeSet) -> Vec<(String, String)> {
    recipes
        .iter()
        .flat_map(|recipe| {
            recipe
                .ingredients
                .iter()
                .map(move |line| (line.item.clone(), recipe.result.clone()))
        })
        .collect()
}

fn quoted(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Renders the crafting graph as a Graphviz `digraph`.
#[must_use]
pub fn render_dot(registry: &ItemRegistry, graph: &DependencyGraph) -> String {
    let mut dot = String::from("digraph crafting {\n    node [style=filled];\n");

    for item in registry.iter() {
        let color = if item.is_basic { BASIC_COLOR } else { CRAFTABLE_COLOR };
        // Writing into a String cannot fail.
        let _ = writeln!(dot, "    {} [fillcolor={color}];", quoted(&item.name));
    }
    for item in registry.iter() {
        for next in graph.successors(&item.name) {
            let _ = writeln!(dot, "    {} -> {};", quoted(&item.name), quoted(next));
        }
    }

    dot.push_str("}\n");
    dot
}
