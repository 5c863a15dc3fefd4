//! Command-line interface definitions and handlers.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::run_generation;
