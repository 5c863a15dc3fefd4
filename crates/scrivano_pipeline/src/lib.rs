//! Prompt-chaining pipeline for the scrivano article generator.
//!
//! This crate provides the sequential chain runner that drives multi-stage
//! article generation: an initial draft stage followed by improvement and
//! diagram-insertion stages, each threading the growing conversation history
//! and the current article text to the next.
//!
//! The pieces:
//!
//! - [`SectionParser`] extracts the sentinel-delimited article body from raw
//!   model output.
//! - [`prompts`] holds the fixed instruction text for each stage.
//! - [`template`] renders `{name}` placeholders and escapes literal braces in
//!   prior model output so it survives substitution.
//! - [`Stage`] and [`ChainRunner`] describe and execute the ordered stage
//!   list against a [`scrivano_interface::ChatDriver`].
//! - [`extract`] derives topic tags and a URL slug from the finished article.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
pub mod extract;
mod parser;
pub mod prompts;
pub mod template;

pub use chain::{ChainExecution, ChainRunner, Stage, StageExecution, StageKind};
pub use parser::{SectionParser, ARTICLE_END, ARTICLE_START};
