//! # FORGE
//!
//! Command-line front end of the crafting engine.
//!
//! ```text
//! ┌──────────────┐   load    ┌────────────────────┐  query   ┌──────────┐
//! │ catalog.toml │ ────────> │   CraftingSystem   │ <─────── │ Command  │
//! └──────────────┘           │  (forge_economy)   │          └────┬─────┘
//!                            └─────────┬──────────┘               │
//!                                      │ results                  │
//!                                      ▼                          │
//!                               ┌─────────────┐    text / JSON    │
//!                               │   report    │ ──────────────────┘
//!                               └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - `command`: argument parsing and dispatch
//! - `report`: plain-text renderers for every query result

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod command;
pub mod report;

// Re-export the engine
pub use forge_economy as economy;

pub use command::{Command, CommandError};
