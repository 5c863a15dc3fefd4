//! Wire types for the OpenAI chat-completions API.

use serde::{Deserialize, Serialize};

/// A single message on the OpenAI wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAiMessage {
    /// Wire role: "system", "user", or "assistant"
    pub role: String,
    /// Text content of the message
    pub content: String,
}

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenAiRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<OpenAiMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One completion choice in an API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenAiChoice {
    /// The generated message
    pub message: OpenAiMessage,
    /// Why generation stopped ("stop", "length", ...)
    pub finish_reason: Option<String>,
}

/// Response body from `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenAiResponse {
    /// Response identifier
    pub id: String,
    /// Completion choices; the first is used
    pub choices: Vec<OpenAiChoice>,
}
