//! Request and response types for chat-completion generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use scrivano_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest {
///     messages: vec![Message::new(Role::User, "Hello!")],
///     max_tokens: Some(100),
///     temperature: Some(0.0),
///     model: Some("gpt-4o-mini".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
pub struct GenerateRequest {
    /// The conversation messages to send
    #[builder(default)]
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Model identifier to use
    #[builder(default)]
    pub model: Option<String>,
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scrivano_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "Hello! How can I help?".to_string(),
/// };
///
/// assert!(!response.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The raw text generated by the model
    pub text: String,
}
