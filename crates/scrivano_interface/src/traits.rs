//! Trait definitions for chat-completion backends.

use async_trait::async_trait;
use scrivano_core::{GenerateRequest, GenerateResponse};
use scrivano_error::ScrivanoResult;

/// Core trait that all chat-completion backends must implement.
///
/// This provides the minimal interface for synchronous text generation.
/// Model choice, temperature, token limits, and credentials are owned by the
/// implementing backend; the pipeline only supplies conversation messages.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Generate model output given a conversation request.
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<'a, T: ChatDriver + ?Sized> ChatDriver for &'a T {
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
