//! OpenAI chat-completions API implementation.

mod client;
mod wire;

pub use client::{OpenAiClient, DEFAULT_OPENAI_MODEL};
pub use wire::{OpenAiChoice, OpenAiMessage, OpenAiRequest, OpenAiResponse};
