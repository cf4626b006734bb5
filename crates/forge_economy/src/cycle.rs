//! # Cycle Detection
//!
//! Depth-first traversal of the forward adjacency view with three-color
//! marking. A back-edge to an item still on the traversal stack is a cycle.
//!
//! The traversal keeps its own stack instead of recursing, so deep recipe
//! chains cannot overflow the call stack. Diagnostic only: none of the
//! searches depend on the graph being acyclic.

use std::collections::HashMap;

use crate::graph::DependencyGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Finds one cycle reachable from `roots`.
///
/// The cycle is returned as the item names along it, with the first item
/// repeated at the end (`["A", "B", "A"]`). A recipe consuming its own
/// result yields a cycle of length one (`["A", "A"]`).
#[must_use]
pub fn find_cycle<'a>(
    graph: &'a DependencyGraph,
    roots: impl IntoIterator<Item = &'a str>,
) -> Option<Vec<String>> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();

    for root in roots {
        if marks.contains_key(root) {
            continue;
        }

        // (item, index of the next successor to visit)
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::InProgress);

        while let Some(frame) = stack.last_mut() {
            let (item, cursor) = *frame;
            let Some(next) = graph.successors(item).get(cursor) else {
                marks.insert(item, Mark::Done);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let next = next.as_str();
            match marks.get(next) {
                Some(Mark::InProgress) => {
                    let start = stack
                        .iter()
                        .position(|&(name, _)| name == next)
                        .unwrap_or(0);
                    let mut cycle: Vec<String> =
                        stack[start..].iter().map(|&(name, _)| name.to_owned()).collect();
                    cycle.push(next.to_owned());
                    tracing::debug!("Cycle detected: {:?}", cycle);
                    return Some(cycle);
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next, Mark::InProgress);
                    stack.push((next, 0));
                }
            }
        }
    }

    None
}

/// Returns `true` if any cycle is reachable from `roots`.
#[must_use]
pub fn has_cycle<'a>(
    graph: &'a DependencyGraph,
    roots: impl IntoIterator<Item = &'a str>,
) -> bool {
    find_cycle(graph, roots).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn graph(recipes: &[(&str, &[(&str, i64)])]) -> DependencyGraph {
        let built: Vec<Recipe> = recipes
            .iter()
            .enumerate()
            .map(|(id, &(result, ingredients))| Recipe::new(id, result, 1, ingredients).unwrap())
            .collect();
        DependencyGraph::from_recipes(&built)
    }

    #[test]
    fn test_acyclic_chain() {
        let g = graph(&[
            ("Iron Ingot", &[("Iron Ore", 3), ("Coal", 1)]),
            ("Steel Ingot", &[("Iron Ingot", 2), ("Coal", 2)]),
            ("Steel Sword", &[("Steel Ingot", 3)]),
        ]);
        let roots = ["Coal", "Iron Ore", "Iron Ingot", "Steel Ingot", "Steel Sword"];
        assert!(!has_cycle(&g, roots));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let g = graph(&[
            ("B", &[("A", 1)]),
            ("C", &[("A", 1)]),
            ("D", &[("B", 1), ("C", 1)]),
        ]);
        assert!(!has_cycle(&g, ["A", "B", "C", "D"]));
    }

    #[test]
    fn test_two_item_cycle() {
        let g = graph(&[("A", &[("B", 1)]), ("B", &[("A", 1)])]);
        let cycle = find_cycle(&g, ["A", "B"]).unwrap();
        assert_eq!(cycle, ["A", "B", "A"]);
    }

    #[test]
    fn test_three_item_cycle_behind_a_tail() {
        let g = graph(&[
            ("A", &[("Start", 1)]),
            ("B", &[("A", 1)]),
            ("C", &[("B", 1)]),
            ("A", &[("C", 1)]),
        ]);
        let cycle = find_cycle(&g, ["Start"]).unwrap();
        assert_eq!(cycle, ["A", "B", "C", "A"]);
    }

    #[test]
    fn test_self_loop() {
        let g = graph(&[("Seed", &[("Seed", 1)])]);
        assert_eq!(find_cycle(&g, ["Seed"]).unwrap(), ["Seed", "Seed"]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let names: Vec<String> = (0..50_000).map(|i| format!("item_{i}")).collect();
        let mut built = Vec::with_capacity(names.len());
        for (id, pair) in names.windows(2).enumerate() {
            built.push(Recipe::new(id, &pair[1], 1, &[(pair[0].as_str(), 1)]).unwrap());
        }
        let g = DependencyGraph::from_recipes(&built);
        assert!(!has_cycle(&g, names.iter().map(String::as_str)));
    }
}
