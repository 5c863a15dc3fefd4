//! clap command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LLM-driven technical article generator.
#[derive(Debug, Parser)]
#[command(name = "scrivano", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate today's article
    Run {
        /// Path to the date-keyed title lookup file
        #[arg(long, default_value = "data/titles.json")]
        titles: PathBuf,

        /// Output directory for the finished article
        #[arg(long, default_value = "articles")]
        out: PathBuf,

        /// Number of improvement passes
        #[arg(long, default_value_t = 2)]
        passes: usize,

        /// Set the published front-matter flag to true
        #[arg(long)]
        published: bool,

        /// Override the chat model
        #[arg(long)]
        model: Option<String>,
    },
}
