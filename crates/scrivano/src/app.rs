//! Run wiring: title resolution, chain execution, decoration, persistence.

use crate::{config::AppConfig, emoji, store, template, titles};
use scrivano_error::ScrivanoResult;
use scrivano_interface::ChatDriver;
use scrivano_pipeline::extract::{extract_slug, extract_topics};
use scrivano_pipeline::{prompts, ChainRunner, Stage};
use std::path::PathBuf;

/// Options for a single generation run.
///
/// The improvement pass count and the publish flag are configuration, not
/// hard-coded behavior.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the date-keyed title lookup file.
    pub titles_path: PathBuf,
    /// Directory the finished article is written into.
    pub output_dir: PathBuf,
    /// Number of improvement passes between the draft and the diagram pass.
    pub passes: usize,
    /// Value of the `published` front-matter flag.
    pub published: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            titles_path: PathBuf::from("data/titles.json"),
            output_dir: PathBuf::from("articles"),
            passes: 2,
            published: false,
        }
    }
}

/// Build the standard article chain: draft, N improvement passes, diagrams.
fn article_chain<D: ChatDriver>(driver: D, passes: usize) -> ChainRunner<D> {
    let mut runner = ChainRunner::new(driver).with_stage(Stage::seed(
        "draft",
        prompts::system_message(),
        prompts::generate_prompt(),
    ));
    for i in 0..passes {
        runner = runner.with_stage(Stage::refine(
            format!("improve-{}", i + 1),
            prompts::improve_prompt(),
        ));
    }
    runner.with_stage(Stage::refine("add-diagram", prompts::add_diagram_prompt()))
}

/// Execute one full generation run and return the path of the written file.
///
/// Resolves today's title, drives the stage chain, extracts topics and a
/// slug from the finished article, decorates the body, and persists the
/// document. Any failure aborts the run; there is no partial result.
///
/// # Errors
///
/// Propagates title resolution, model call, parse, and write failures.
#[tracing::instrument(skip(driver, config, options), fields(provider = driver.provider_name(), model = driver.model_name()))]
pub async fn execute<D: ChatDriver>(
    driver: &D,
    config: &AppConfig,
    options: &RunOptions,
) -> ScrivanoResult<PathBuf> {
    tracing::info!("Starting article generation");

    let title = titles::today_title(&options.titles_path, config.timezone())?;
    tracing::info!(title = %title, "Resolved today's title");

    let runner = article_chain(driver, options.passes);
    let execution = runner.execute(&title).await?;

    tracing::info!(
        stages = execution.stage_executions.len(),
        article_length = execution.article.len(),
        "Chain execution completed"
    );

    let topics = extract_topics(driver, &execution.article).await?;
    let slug = extract_slug(driver, &execution.article).await?;
    tracing::info!(slug = %slug, topics = ?topics, "Extracted topics and slug");

    let body = template::decorate(&execution.article);
    let document = template::front_matter(
        &title,
        emoji::random_emoji(),
        &topics,
        options.published,
        &body,
    );

    let path = store::save_article(&slug, &document, &options.output_dir)?;
    tracing::info!(path = %path.display(), "Article generation completed");

    Ok(path)
}
