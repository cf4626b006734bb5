//! # Path Reconstruction Search
//!
//! Breadth-first search backwards from a target over the reverse adjacency
//! view, stopping at the first recipe whose ingredients are all basic.
//!
//! The returned path lists items to craft, from the one closest to the
//! basics up to the target. It is a witness, not an optimum: recipes are
//! tried in insertion order and the first fully basic one wins, without
//! weighing quantities or comparing alternatives.

use std::collections::{HashSet, VecDeque};

use crate::graph::DependencyGraph;
use crate::recipe::RecipeSet;

/// Finds one crafting path from `basics` to `target`.
///
/// Returns `Some(vec![])` if `target` is basic already and `None` when no
/// chain of recipes resolves to basic resources.
#[must_use]
pub fn crafting_path(
    graph: &DependencyGraph,
    recipes: &RecipeSet,
    target: &str,
    basics: &HashSet<String>,
) -> Option<Vec<String>> {
    if basics.contains(target) {
        return Some(Vec::new());
    }

    let mut visited: HashSet<&str> = HashSet::from([target]);
    let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::from([(target, vec![target])]);

    while let Some((current, path)) = queue.pop_front() {
        for recipe in graph.producers(current).iter().filter_map(|&id| recipes.get(id)) {
            let mut all_basic = true;

            for line in &recipe.ingredients {
                let ingredient = line.item.as_str();
                if basics.contains(ingredient) {
                    continue;
                }
                all_basic = false;
                if visited.insert(ingredient) {
                    let mut extended = Vec::with_capacity(path.len() + 1);
                    extended.push(ingredient);
                    extended.extend_from_slice(&path);
                    queue.push_back((ingredient, extended));
                }
            }

            if all_basic {
                tracing::debug!("Crafting path for '{}': {:?}", target, path);
                return Some(path.into_iter().map(str::to_owned).collect());
            }
        }
    }

    tracing::debug!("No crafting path for '{}'", target);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn setup(recipes: &[(&str, &[(&str, i64)])]) -> (DependencyGraph, RecipeSet) {
        let mut set = RecipeSet::new();
        let mut graph = DependencyGraph::new();
        for &(result, ingredients) in recipes {
            let recipe = Recipe::new(set.next_id(), result, 1, ingredients).unwrap();
            graph.link(&recipe);
            set.push(recipe).unwrap();
        }
        (graph, set)
    }

    fn basics(names: &[&str]) -> HashSet<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    #[test]
    fn test_basic_target_has_empty_path() {
        let (graph, set) = setup(&[("Plank", &[("Wood", 1)])]);
        assert_eq!(crafting_path(&graph, &set, "Wood", &basics(&["Wood"])), Some(vec![]));
    }

    #[test]
    fn test_single_hop() {
        let (graph, set) = setup(&[("Plank", &[("Wood", 1)])]);
        let path = crafting_path(&graph, &set, "Plank", &basics(&["Wood"])).unwrap();
        assert_eq!(path, ["Plank"]);
    }

    #[test]
    fn test_path_runs_from_basics_to_target() {
        let (graph, set) = setup(&[
            ("Plank", &[("Wood", 1)]),
            ("Handle", &[("Plank", 2)]),
            ("Sword", &[("Handle", 1), ("Iron", 1)]),
        ]);
        let path = crafting_path(&graph, &set, "Sword", &basics(&["Wood", "Iron"])).unwrap();
        assert_eq!(path, ["Plank", "Handle", "Sword"]);
    }

    #[test]
    fn test_first_satisfied_recipe_wins() {
        let (graph, set) = setup(&[
            ("Plank", &[("Wood", 1)]),
            ("Torch", &[("Plank", 1)]),
            ("Torch", &[("Coal", 1)]),
        ]);
        // The second Torch recipe is fully basic, so the search stops there
        // before ever expanding Plank.
        let path = crafting_path(&graph, &set, "Torch", &basics(&["Wood", "Coal"])).unwrap();
        assert_eq!(path, ["Torch"]);
    }

    #[test]
    fn test_no_recipe_means_not_found() {
        let (graph, set) = setup(&[("Plank", &[("Wood", 1)])]);
        assert_eq!(crafting_path(&graph, &set, "Diamond", &basics(&["Wood"])), None);
    }

    #[test]
    fn test_unresolvable_chain_not_found() {
        let (graph, set) = setup(&[("Plank", &[("Wood", 1)])]);
        assert_eq!(crafting_path(&graph, &set, "Plank", &basics(&["Iron"])), None);
    }

    #[test]
    fn test_cycle_does_not_loop_forever() {
        let (graph, set) = setup(&[("A", &[("B", 1)]), ("B", &[("A", 1)])]);
        assert_eq!(crafting_path(&graph, &set, "A", &basics(&["Wood"])), None);
    }
}
