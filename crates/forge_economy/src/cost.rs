//! # Minimum-Cost Search
//!
//! Shortest path over the forward adjacency view with every edge weighing
//! one crafting step. All basic resources start at distance 0.
//!
//! Ingredient quantities and recipe-level gating are ignored here: an item
//! one edge away from a basic resource costs 1 step even if its only recipe
//! also needs an ingredient nobody can obtain. The reachability search is the
//! one that enforces gating, so the two can disagree on purpose.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;

/// Outcome of a minimum-cost query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CraftCost {
    /// Number of crafting steps from the basic set.
    Steps(u32),
    /// The target never received a finite distance.
    Unreachable,
}

impl CraftCost {
    /// Returns the step count, or `None` when unreachable.
    #[inline]
    #[must_use]
    pub const fn steps(self) -> Option<u32> {
        match self {
            Self::Steps(steps) => Some(steps),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` if the target has a finite cost.
    #[inline]
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }
}

impl fmt::Display for CraftCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(steps) => write!(f, "{steps}"),
            Self::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Distance in steps from `basics` to every item it can lead to.
///
/// Items absent from the map are unreachable.
#[must_use]
pub fn craft_distances(graph: &DependencyGraph, basics: &HashSet<String>) -> HashMap<String, u32> {
    let mut distance: HashMap<&str, u32> = HashMap::with_capacity(basics.len());
    let mut frontier: BinaryHeap<Reverse<(u32, &str)>> = BinaryHeap::new();
    let mut settled: HashSet<&str> = HashSet::new();

    for basic in basics {
        distance.insert(basic.as_str(), 0);
        frontier.push(Reverse((0, basic.as_str())));
    }

    while let Some(Reverse((steps, current))) = frontier.pop() {
        if !settled.insert(current) {
            continue;
        }

        let candidate = steps.saturating_add(1);
        for next in graph.successors(current) {
            let next = next.as_str();
            let known = distance.get(next).copied().unwrap_or(u32::MAX);
            if candidate < known {
                tracing::trace!("Relaxed '{}' to {} steps via '{}'", next, candidate, current);
                distance.insert(next, candidate);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    distance
        .into_iter()
        .map(|(name, steps)| (name.to_owned(), steps))
        .collect()
}

/// Minimum number of crafting steps from `basics` to `target`.
///
/// Returns `Steps(0)` whenever `target` is itself basic, registered or not.
#[must_use]
pub fn minimum_craft_cost(
    graph: &DependencyGraph,
    target: &str,
    basics: &HashSet<String>,
) -> CraftCost {
    if basics.contains(target) {
        return CraftCost::Steps(0);
    }

    let cost = craft_distances(graph, basics)
        .get(target)
        .copied()
        .map_or(CraftCost::Unreachable, CraftCost::Steps);
    tracing::debug!("Craft cost of '{}': {}", target, cost);
    cost
}
