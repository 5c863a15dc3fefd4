//! Scrivano - LLM-driven technical article generator.
//!
//! Scrivano generates long-form technical articles by orchestrating
//! sequential calls to a chat-completion API: an initial draft, a
//! configurable number of improvement passes, and a diagram-insertion pass.
//! Each stage threads the growing conversation history forward and extracts
//! the sentinel-delimited article body from the model's response. The
//! finished article is tagged, slugged, decorated with a disclaimer, and
//! written to disk with a front-matter block.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scrivano::{AppConfig, RunOptions, execute};
//! use scrivano_models::OpenAiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let driver = OpenAiClient::new(config.api_key());
//!     let options = RunOptions::default();
//!
//!     let path = execute(&driver, &config, &options).await?;
//!     println!("Article written to {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Scrivano is organized as a workspace with focused crates:
//!
//! - `scrivano_core` - Core data types (Role, Message, requests)
//! - `scrivano_interface` - ChatDriver trait definition
//! - `scrivano_error` - Error types
//! - `scrivano_models` - Chat-completion provider implementations
//! - `scrivano_pipeline` - Chain runner, section parser, prompts
//!
//! This crate (`scrivano`) wires them together and provides the CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod emoji;
mod store;
mod template;
mod titles;

pub use app::{execute, RunOptions};
pub use config::AppConfig;
pub use emoji::random_emoji;
pub use store::save_article;
pub use template::{decorate, front_matter, DISCLAIMER};
pub use titles::{title_for_date, today_title};

// Re-export the building blocks for library users.
pub use scrivano_core::*;
pub use scrivano_error::*;
pub use scrivano_interface::ChatDriver;
pub use scrivano_models::OpenAiClient;
pub use scrivano_pipeline::{
    extract, prompts, template as prompt_template, ChainExecution, ChainRunner, SectionParser,
    Stage, StageExecution, StageKind,
};
