//! Chat-completion backend implementations for scrivano.
//!
//! Currently a single backend is provided: the OpenAI chat-completions API.
//! All backends implement [`scrivano_interface::ChatDriver`], so pipeline
//! code never depends on a concrete provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    OpenAiChoice, OpenAiClient, OpenAiMessage, OpenAiRequest, OpenAiResponse,
    DEFAULT_OPENAI_MODEL,
};
