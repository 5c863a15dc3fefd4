//! Generation command handler.

use scrivano::{execute, AppConfig, OpenAiClient, RunOptions, ScrivanoResult};
use std::path::PathBuf;

/// Run one article generation pass with the given CLI arguments.
pub async fn run_generation(
    titles: PathBuf,
    out: PathBuf,
    passes: usize,
    published: bool,
    model: Option<String>,
) -> ScrivanoResult<()> {
    let config = AppConfig::from_env()?;

    let driver = match model {
        Some(model) => OpenAiClient::with_model(config.api_key(), model),
        None => OpenAiClient::new(config.api_key()),
    };

    let options = RunOptions {
        titles_path: titles,
        output_dir: out,
        passes,
        published,
    };

    let path = execute(&driver, &config, &options).await?;
    tracing::info!(path = %path.display(), "Done");

    Ok(())
}
