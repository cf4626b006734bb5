//! # Reports
//!
//! Plain-text renderings of query results, one line per entry.

use std::collections::HashSet;
use std::fmt::Write as _;

use forge_economy::{AdjacencySnapshot, CraftCost, Item, Recipe};

/// Shown when a target has no finite cost.
pub const IMPOSSIBLE: &str = "Impossible to craft with the current data";
/// Shown when no crafting path exists.
pub const NO_PATH: &str = "Path not found";

/// One line per item: name and kind.
#[must_use]
pub fn items(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        let kind = if item.is_basic { "basic" } else { "craftable" };
        let _ = writeln!(out, "{} ({kind})", item.name);
    }
    out
}

/// One line per recipe, e.g. `#0: Wood x1 -> Plank x4`.
#[must_use]
pub fn recipes(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for recipe in recipes {
        let inputs: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|line| format!("{} x{}", line.item, line.quantity))
            .collect();
        let _ = writeln!(
            out,
            "#{}: {} -> {} x{}",
            recipe.id,
            inputs.join(" + "),
            recipe.result,
            recipe.result_quantity
        );
    }
    out
}

/// Reachable item names, sorted.
#[must_use]
pub fn reachable(reached: &HashSet<String>) -> String {
    let mut names: Vec<&str> = reached.iter().map(String::as_str).collect();
    names.sort_unstable();
    let mut out = String::new();
    for name in names {
        let _ = writeln!(out, "{name}");
    }
    out
}

/// Minimum cost line for `target`.
#[must_use]
pub fn cost(target: &str, cost: CraftCost) -> String {
    match cost {
        CraftCost::Steps(steps) => format!("Minimum cost of {target}: {steps} steps\n"),
        CraftCost::Unreachable => format!("{IMPOSSIBLE}\n"),
    }
}

/// Crafting path line for `target`.
#[must_use]
pub fn path(target: &str, path: Option<&[String]>) -> String {
    match path {
        None => format!("{NO_PATH}\n"),
        Some([]) => format!("{target} is a basic resource\n"),
        Some(steps) => format!("{}\n", steps.join(" -> ")),
    }
}

/// Cycle detection result.
#[must_use]
pub fn cycle(cycle: Option<&[String]>) -> String {
    match cycle {
        None => "No cycles detected\n".to_owned(),
        Some(items) => format!("Cycle detected: {}\n", items.join(" -> ")),
    }
}

/// Adjacency table with degrees and a summary footer.
#[must_use]
pub fn adjacency(snapshot: &AdjacencySnapshot) -> String {
    let mut out = String::new();
    for (name, successors) in &snapshot.adjacency {
        let marker = if snapshot.basic.get(name).copied().unwrap_or(false) { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {name} [in {}, out {}] -> {}",
            snapshot.in_degree.get(name).copied().unwrap_or(0),
            snapshot.out_degree.get(name).copied().unwrap_or(0),
            successors.join(", ")
        );
    }
    let _ = writeln!(
        out,
        "{} items, {} edges (* basic)",
        snapshot.vertex_count, snapshot.edge_count
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_economy::CraftingSystem;

    fn sword_system() -> CraftingSystem {
        let mut system = CraftingSystem::new();
        system.register_item("Wood", true).unwrap();
        system.register_item("Iron", true).unwrap();
        system.register_recipe("Plank", 4, &[("Wood", 1)]).unwrap();
        system.register_recipe("Sword", 1, &[("Plank", 1), ("Iron", 1)]).unwrap();
        system
    }

    #[test]
    fn test_items_report() {
        let text = items(&sword_system().list_items());
        assert_eq!(
            text,
            "Iron (basic)\nPlank (craftable)\nSword (craftable)\nWood (basic)\n"
        );
    }

    #[test]
    fn test_recipes_report() {
        let text = recipes(&sword_system().list_recipes());
        assert_eq!(
            text,
            "#0: Wood x1 -> Plank x4\n#1: Plank x1 + Iron x1 -> Sword x1\n"
        );
    }

    #[test]
    fn test_reachable_is_sorted() {
        let reached: HashSet<String> = ["Wood", "Axe", "Plank"].map(String::from).into();
        assert_eq!(reachable(&reached), "Axe\nPlank\nWood\n");
    }

    #[test]
    fn test_cost_messages() {
        assert_eq!(cost("Sword", CraftCost::Steps(2)), "Minimum cost of Sword: 2 steps\n");
        assert_eq!(
            cost("Sword", CraftCost::Unreachable),
            "Impossible to craft with the current data\n"
        );
    }

    #[test]
    fn test_path_messages() {
        let steps = vec!["Plank".to_owned(), "Sword".to_owned()];
        assert_eq!(path("Sword", Some(&steps)), "Plank -> Sword\n");
        assert_eq!(path("Wood", Some(&[])), "Wood is a basic resource\n");
        assert_eq!(path("Sword", None), "Path not found\n");
    }

    #[test]
    fn test_cycle_messages() {
        let found = vec!["A".to_owned(), "B".to_owned(), "A".to_owned()];
        assert_eq!(cycle(Some(&found)), "Cycle detected: A -> B -> A\n");
        assert_eq!(cycle(None), "No cycles detected\n");
    }

    #[test]
    fn test_adjacency_table() {
        let text = adjacency(&sword_system().adjacency_snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "* Iron [in 0, out 1] -> Sword");
        assert_eq!(lines[2], "  Sword [in 2, out 0] -> ");
        assert_eq!(lines[4], "4 items, 3 edges (* basic)");
    }
}
