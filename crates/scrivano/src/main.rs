//! Scrivano CLI binary.
//!
//! Generates one technical article per invocation: resolves today's title
//! from the lookup table, runs the generation chain, and writes the finished
//! document into the output directory.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{run_generation, Cli, Commands};

    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "info" };
    scrivano::init_telemetry(default_directive)?;

    match cli.command {
        Commands::Run {
            titles,
            out,
            passes,
            published,
            model,
        } => {
            run_generation(titles, out, passes, published, model).await?;
        }
    }

    Ok(())
}
