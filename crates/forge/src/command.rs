//! # Commands
//!
//! Parses `forge_cli` arguments into a [`Command`] and runs it against a
//! loaded [`CraftingSystem`], producing the text to print.
//!
//! ```text
//! forge_cli <catalog.toml> items
//! forge_cli <catalog.toml> recipes
//! forge_cli <catalog.toml> reachable Wood=1 Iron=2
//! forge_cli <catalog.toml> cost "Iron Sword" [Wood,Iron]
//! forge_cli <catalog.toml> path "Iron Sword" [Wood,Iron]
//! forge_cli <catalog.toml> adjacency [--json]
//! forge_cli <catalog.toml> cycles
//! forge_cli <catalog.toml> dot
//! ```

use std::collections::{HashMap, HashSet};

use forge_economy::{CraftingError, CraftingSystem};
use thiserror::Error;

use crate::report;

/// Usage text printed on argument errors.
pub const USAGE: &str = "\
Usage: forge_cli <catalog.toml> <command> [args]

Commands:
  items                          List every item
  recipes                        List every recipe
  reachable Name=qty ...         Items craftable from a resource pool
  cost <target> [basic,...]      Minimum crafting steps to a target
  path <target> [basic,...]      One crafting path to a target
  adjacency [--json]             Adjacency table with degrees
  cycles                         Report one cycle, if any
  dot                            Graphviz rendering of the graph

The basic list defaults to the catalog's basic items.";

/// Errors raised while parsing or running a command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Too few arguments or an unknown command.
    #[error("{0}")]
    Usage(String),

    /// A `Name=qty` resource could not be parsed.
    #[error("invalid resource '{0}': expected Name=qty with a non-negative quantity")]
    InvalidResource(String),

    /// The catalog could not be loaded.
    #[error(transparent)]
    Crafting(#[from] CraftingError),

    /// JSON rendering failed.
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single query against a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every item.
    Items,
    /// List every recipe.
    Recipes,
    /// Reachable items from a starting pool.
    Reachable(HashMap<String, u32>),
    /// Minimum craft cost; `None` basics means the catalog's basic items.
    Cost {
        /// Target item.
        target: String,
        /// Explicit basic set.
        basics: Option<HashSet<String>>,
    },
    /// Crafting path; `None` basics means the catalog's basic items.
    Path {
        /// Target item.
        target: String,
        /// Explicit basic set.
        basics: Option<HashSet<String>>,
    },
    /// Adjacency snapshot, as a table or JSON.
    Adjacency {
        /// Render as JSON instead of a table.
        json: bool,
    },
    /// Cycle detection.
    Cycles,
    /// Graphviz output.
    Dot,
}

fn usage(message: &str) -> CommandError {
    CommandError::Usage(format!("{message}\n\n{USAGE}"))
}

/// Parses one `Name=qty` resource. The name may contain spaces and `=`.
fn parse_resource(arg: &str) -> Result<(String, u32), CommandError> {
    let invalid = || CommandError::InvalidResource(arg.to_owned());
    let (name, quantity) = arg.rsplit_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let quantity = quantity.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((name.to_owned(), quantity))
}

/// Parses a comma-separated basic list; blank entries are skipped.
fn parse_basics(arg: Option<&String>) -> Option<HashSet<String>> {
    arg.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    })
}

impl Command {
    /// Parses the command words following the catalog path.
    ///
    /// # Errors
    ///
    /// Returns `Usage` for a missing or unknown command or argument and
    /// `InvalidResource` for a malformed `Name=qty` pair.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let Some((name, rest)) = args.split_first() else {
            return Err(usage("missing command"));
        };

        match name.as_str() {
            "items" => Ok(Self::Items),
            "recipes" => Ok(Self::Recipes),
            "reachable" => {
                let pool = rest
                    .iter()
                    .map(|arg| parse_resource(arg))
                    .collect::<Result<HashMap<_, _>, _>>()?;
                Ok(Self::Reachable(pool))
            }
            "cost" | "path" => {
                if rest.len() > 2 {
                    return Err(usage(&format!(
                        "{name} takes a target and one comma-separated basic list; \
                         quote names containing spaces"
                    )));
                }
                let target = rest
                    .first()
                    .ok_or_else(|| usage(&format!("{name} needs a target item")))?
                    .clone();
                let basics = parse_basics(rest.get(1));
                if name == "cost" {
                    Ok(Self::Cost { target, basics })
                } else {
                    Ok(Self::Path { target, basics })
                }
            }
            "adjacency" => match rest {
                [] => Ok(Self::Adjacency { json: false }),
                [flag] if flag == "--json" => Ok(Self::Adjacency { json: true }),
                _ => Err(usage("adjacency only accepts --json")),
            },
            "cycles" => Ok(Self::Cycles),
            "dot" => Ok(Self::Dot),
            other => Err(usage(&format!("unknown command '{other}'"))),
        }
    }

    /// Runs the command and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the adjacency snapshot cannot be serialized.
    pub fn run(&self, system: &CraftingSystem) -> Result<String, CommandError> {
        let catalog_basics = || system.basic_items();

        let output = match self {
            Self::Items => report::items(&system.list_items()),
            Self::Recipes => report::recipes(&system.list_recipes()),
            Self::Reachable(pool) => report::reachable(&system.reachable_items(pool)),
            Self::Cost { target, basics } => {
                let basics = basics.clone().unwrap_or_else(catalog_basics);
                report::cost(target, system.minimum_craft_cost(target, &basics))
            }
            Self::Path { target, basics } => {
                let basics = basics.clone().unwrap_or_else(catalog_basics);
                report::path(target, system.crafting_path(target, &basics).as_deref())
            }
            Self::Adjacency { json: false } => report::adjacency(&system.adjacency_snapshot()),
            Self::Adjacency { json: true } => {
                let mut text = serde_json::to_string_pretty(&system.adjacency_snapshot())?;
                text.push('\n');
                text
            }
            Self::Cycles => report::cycle(system.find_cycle().as_deref()),
            Self::Dot => system.to_dot(),
        };

        tracing::debug!("Ran {:?}: {} bytes of output", self, output.len());
        Ok(output)
    }
}
