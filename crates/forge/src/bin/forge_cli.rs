//! # FORGE CLI
//!
//! Loads a crafting catalog and answers one query.
//!
//! ```bash
//! forge_cli data/catalogs/armory.toml cost "Iron Sword"
//! RUST_LOG=forge_economy=debug forge_cli data/catalogs/armory.toml reachable Wood=1 Iron=2
//! ```
//!
//! Results go to stdout, logs and errors to stderr.

use std::process::ExitCode;

use forge::economy::CraftingCatalog;
use forge::command::{Command, CommandError, USAGE};
use tracing_subscriber::EnvFilter;

fn run(args: &[String]) -> Result<String, CommandError> {
    let Some((catalog_path, words)) = args.split_first() else {
        return Err(CommandError::Usage(USAGE.to_owned()));
    };

    let command = Command::parse(words)?;
    let system = CraftingCatalog::load(catalog_path)?.build()?;
    command.run(&system)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
