//! # Reachability Search
//!
//! Resource-gated breadth-first search over the forward adjacency view.
//!
//! Starting from a pool of resource quantities, an item becomes reachable
//! once ANY recipe producing it has every ingredient available in the
//! required quantity. A reached item counts as [`Quantity::Unbounded`] from
//! then on: it can be crafted again whenever needed, so materials are not
//! conserved.
//!
//! ```text
//! {Wood: 1, Iron: 1}
//!        │ Wood -> Plank      Plank <- 1 Wood        ✓ unlock
//!        │ Plank -> Sword     Sword <- 1 Plank, 1 Iron ✓ unlock
//!        ▼
//! {Wood, Iron, Plank, Sword}
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::DependencyGraph;
use crate::recipe::RecipeSet;

/// Amount of an item available during the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quantity {
    /// A counted amount from the starting pool.
    Finite(u32),
    /// Craftable at will; satisfies any requirement.
    Unbounded,
}

impl Quantity {
    /// Returns `true` if this amount satisfies a requirement of `required`.
    #[inline]
    #[must_use]
    pub const fn covers(self, required: u32) -> bool {
        match self {
            Self::Finite(amount) => amount >= required,
            Self::Unbounded => true,
        }
    }
}

/// Checks whether any recipe producing `item` is satisfied by `available`.
fn is_craftable(
    graph: &DependencyGraph,
    recipes: &RecipeSet,
    item: &str,
    available: &HashMap<&str, Quantity>,
) -> bool {
    graph
        .producers(item)
        .iter()
        .filter_map(|&id| recipes.get(id))
        .any(|recipe| {
            recipe.is_satisfied_by(|line| {
                available
                    .get(line.item.as_str())
                    .is_some_and(|amount| amount.covers(line.quantity))
            })
        })
}

/// Computes every item reachable from `starting`.
///
/// Every key of `starting` is part of the result, even with a quantity of
/// zero. A starting resource that can also be crafted is upgraded to
/// unbounded and queued a second time, so adding a resource never shrinks
/// the result. A plain "enqueue each item once" search would keep such a
/// resource at its starting count and can reach fewer items than this one.
///
/// The result set does not depend on the iteration order of `starting`: an
/// item skipped early is re-examined each time one of its ingredients is
/// reached.
#[must_use]
pub fn reachable_items(
    graph: &DependencyGraph,
    recipes: &RecipeSet,
    starting: &HashMap<String, u32>,
) -> HashSet<String> {
    let mut available: HashMap<&str, Quantity> = starting
        .iter()
        .map(|(name, &amount)| (name.as_str(), Quantity::Finite(amount)))
        .collect();
    let mut reached: HashSet<&str> = starting.keys().map(String::as_str).collect();
    let mut queue: VecDeque<&str> = starting.keys().map(String::as_str).collect();

    while let Some(current) = queue.pop_front() {
        for next in graph.successors(current) {
            let next = next.as_str();
            if available.get(next) == Some(&Quantity::Unbounded) {
                continue;
            }
            if is_craftable(graph, recipes, next, &available) {
                tracing::trace!("Unlocked '{}' via '{}'", next, current);
                reached.insert(next);
                available.insert(next, Quantity::Unbounded);
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(
        "Reachability: {} starting resources -> {} items",
        starting.len(),
        reached.len()
    );
    reached.into_iter().map(str::to_owned).collect()
}
