//! Sequential chain execution logic.
//!
//! This module provides the runner that processes multi-stage article
//! pipelines by calling the chat API in sequence, threading conversation
//! history and the current article text between stages.

use crate::template::{escape_braces, render};
use crate::SectionParser;
use scrivano_core::{GenerateRequest, Message, Role};
use scrivano_error::{PipelineError, PipelineErrorKind, ScrivanoResult};
use scrivano_interface::ChatDriver;
use std::collections::HashMap;

/// How a stage contributes to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageKind {
    /// Initial producer: starts the conversation from an empty history.
    Seed {
        /// System persona text
        system: String,
        /// Instruction text for the first draft
        prompt: String,
    },
    /// Follow-up generator: echoes the prior article back as an assistant
    /// turn, then appends a new instruction.
    Refine {
        /// Instruction text for this pass
        prompt: String,
    },
}

/// One step of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    name: String,
    kind: StageKind,
}

impl Stage {
    /// Create the initial draft stage.
    pub fn seed(
        name: impl Into<String>,
        system: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: StageKind::Seed {
                system: system.into(),
                prompt: prompt.into(),
            },
        }
    }

    /// Create a follow-up stage.
    pub fn refine(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StageKind::Refine {
                prompt: prompt.into(),
            },
        }
    }

    /// Stage name, used for logging and execution records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stage kind.
    pub fn kind(&self) -> &StageKind {
        &self.kind
    }
}

/// Execution record for a single stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageExecution {
    /// Name of the stage.
    pub stage_name: String,
    /// The raw text response from the model, before section parsing.
    pub response: String,
    /// Position in the execution sequence (0-indexed).
    pub sequence_number: usize,
}

/// Complete execution result for a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainExecution {
    /// The final conversation history, unrendered.
    pub history: Vec<Message>,
    /// The final parsed article text.
    pub article: String,
    /// Ordered list of stage executions.
    pub stage_executions: Vec<StageExecution>,
}

/// Executes article pipelines by calling the chat API in sequence.
///
/// The runner folds over the ordered stage list starting from empty history
/// and empty article. Each stage extends the history, issues exactly one
/// model call over the rendered history, and replaces the article with the
/// parsed section of the response. Any stage failure aborts the run; stages
/// after the failed one are never invoked.
pub struct ChainRunner<D: ChatDriver> {
    driver: D,
    stages: Vec<Stage>,
    parser: SectionParser,
}

impl<D: ChatDriver> ChainRunner<D> {
    /// Create a new chain runner with the given chat driver and no stages.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            stages: Vec::new(),
            parser: SectionParser::new(),
        }
    }

    /// Append a stage to the chain.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append several stages to the chain.
    pub fn with_stages(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.stages.extend(stages);
        self
    }

    /// Get a reference to the underlying chat driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Execute the chain for the given title.
    ///
    /// Each follow-up stage grows the history by exactly two entries: an
    /// assistant echo of the prior article with braces escaped, then the
    /// stage's user instruction. The `{title}` binding is interpolated into
    /// every message at invocation time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The chain has no stages
    /// - Any model call fails
    /// - Any response lacks the delimited article section
    #[tracing::instrument(skip(self), fields(stage_count = self.stages.len()))]
    pub async fn execute(&self, title: &str) -> ScrivanoResult<ChainExecution> {
        if self.stages.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyChain).into());
        }

        let mut bindings = HashMap::new();
        bindings.insert("title".to_string(), title.to_string());

        let mut history: Vec<Message> = Vec::new();
        let mut article = String::new();
        let mut stage_executions = Vec::new();

        for (sequence_number, stage) in self.stages.iter().enumerate() {
            tracing::info!(stage = %stage.name(), sequence_number, "Executing stage");

            match stage.kind() {
                StageKind::Seed { system, prompt } => {
                    history.push(Message::new(Role::System, system.clone()));
                    history.push(Message::new(Role::User, prompt.clone()));
                }
                StageKind::Refine { prompt } => {
                    history.push(Message::new(Role::Assistant, escape_braces(&article)));
                    history.push(Message::new(Role::User, prompt.clone()));
                }
            }

            let rendered = history
                .iter()
                .map(|msg| {
                    render(&msg.content, &bindings).map(|content| Message::new(msg.role, content))
                })
                .collect::<Result<Vec<Message>, PipelineError>>()?;

            let request = GenerateRequest {
                messages: rendered,
                ..Default::default()
            };

            let response = self.driver.generate(&request).await?;
            article = self.parser.parse(&response.text)?;

            tracing::debug!(
                stage = %stage.name(),
                article_length = article.len(),
                "Stage completed"
            );

            stage_executions.push(StageExecution {
                stage_name: stage.name().to_string(),
                response: response.text,
                sequence_number,
            });
        }

        Ok(ChainExecution {
            history,
            article,
            stage_executions,
        })
    }
}
