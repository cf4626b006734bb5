//! End-to-end tests of the `forge_cli` binary against the armory catalog.
//!
//! Run with: cargo test --package forge --test forge_cli

use std::process::{Command, Output};

const ARMORY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/catalogs/armory.toml");

fn forge_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_forge_cli"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cost_with_catalog_basics() {
    let output = forge_cli(&[ARMORY, "cost", "Iron Sword"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Minimum cost of Iron Sword: 2 steps\n");
}

#[test]
fn test_cost_impossible() {
    let output = forge_cli(&[ARMORY, "cost", "Armor", "Wood"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Impossible to craft with the current data\n");
}

#[test]
fn test_path_and_missing_path() {
    let found = forge_cli(&[ARMORY, "path", "Iron Sword"]);
    assert_eq!(stdout(&found), "Iron Blade -> Iron Sword\n");

    let missing = forge_cli(&[ARMORY, "path", "Shield", "Wood"]);
    assert!(missing.status.success());
    assert_eq!(stdout(&missing), "Path not found\n");
}

#[test]
fn test_reachable_pool() {
    let output = forge_cli(&[ARMORY, "reachable", "Wood=1", "Iron=2"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Iron\nIron Blade\nIron Sword\nPlank\nWood\nWooden Handle\n"
    );
}

#[test]
fn test_cycles_and_dot() {
    assert_eq!(stdout(&forge_cli(&[ARMORY, "cycles"])), "No cycles detected\n");

    let dot = stdout(&forge_cli(&[ARMORY, "dot"]));
    assert!(dot.starts_with("digraph crafting {"));
    assert!(dot.contains("\"Leather\" -> \"Armor\";"));
}

#[test]
fn test_errors_exit_nonzero() {
    let bad_command = forge_cli(&[ARMORY, "smelt"]);
    assert!(!bad_command.status.success());
    assert!(String::from_utf8_lossy(&bad_command.stderr).contains("unknown command 'smelt'"));

    let bad_resource = forge_cli(&[ARMORY, "reachable", "Wood=-3"]);
    assert!(!bad_resource.status.success());

    let missing_catalog = forge_cli(&["/definitely/not/here.toml", "items"]);
    assert!(!missing_catalog.status.success());
    assert!(stdout(&missing_catalog).is_empty());

    assert!(!forge_cli(&[]).status.success());
}
