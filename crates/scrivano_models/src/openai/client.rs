//! OpenAI chat-completions client.

use super::{OpenAiMessage, OpenAiRequest, OpenAiResponse};
use async_trait::async_trait;
use reqwest::Client;
use scrivano_core::{GenerateRequest, GenerateResponse, Role};
use scrivano_error::{BackendError, BackendErrorKind, ScrivanoResult};
use scrivano_interface::ChatDriver;
use tracing::{debug, error, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model when a request does not specify one.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const DEFAULT_TEMPERATURE: f32 = 0.0;
const DEFAULT_MAX_TOKENS: u32 = 8192;

/// OpenAI API client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI client with the default model.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_OPENAI_MODEL)
    }

    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-4o-mini")
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!(model = %model, "Creating new OpenAI client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Sends a request to the OpenAI API.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate_openai(&self, request: &OpenAiRequest) -> ScrivanoResult<OpenAiResponse> {
        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                BackendError::new(BackendErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(BackendError::new(BackendErrorKind::ApiStatus {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let openai_response: OpenAiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            BackendError::new(BackendErrorKind::Decode(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = %openai_response.id, "Received response from OpenAI");
        Ok(openai_response)
    }

    /// Converts a scrivano GenerateRequest to an OpenAI API request.
    fn convert_request(&self, request: &GenerateRequest) -> OpenAiRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| OpenAiMessage {
                role: match msg.role {
                    Role::System => "system".to_string(),
                    Role::User => "user".to_string(),
                    Role::Assistant => "assistant".to_string(),
                },
                content: msg.content.clone(),
            })
            .collect();

        OpenAiRequest {
            model: request.model.clone().unwrap_or_else(|| self.model.clone()),
            messages,
            temperature: request.temperature.or(Some(DEFAULT_TEMPERATURE)),
            max_tokens: request.max_tokens.or(Some(DEFAULT_MAX_TOKENS)),
        }
    }
}

#[async_trait]
impl ChatDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(messages = req.messages.len()))]
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse> {
        let openai_request = self.convert_request(req);
        let response = self.generate_openai(&openai_request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| BackendError::new(BackendErrorKind::EmptyResponse))?;

        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivano_core::Message;

    #[test]
    fn convert_request_maps_roles_to_wire_names() {
        let client = OpenAiClient::new("test-key");
        let request = GenerateRequest {
            messages: vec![
                Message::new(Role::System, "persona"),
                Message::new(Role::User, "question"),
                Message::new(Role::Assistant, "answer"),
            ],
            ..Default::default()
        };

        let wire = client.convert_request(&request);

        let roles: Vec<&str> = wire.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant"]);
    }

    #[test]
    fn convert_request_applies_client_defaults() {
        let client = OpenAiClient::new("test-key");
        let request = GenerateRequest::default();

        let wire = client.convert_request(&request);

        assert_eq!(wire.model, DEFAULT_OPENAI_MODEL);
        assert_eq!(wire.temperature, Some(DEFAULT_TEMPERATURE));
        assert_eq!(wire.max_tokens, Some(DEFAULT_MAX_TOKENS));
    }

    #[test]
    fn convert_request_prefers_request_overrides() {
        let client = OpenAiClient::with_model("test-key", "gpt-4o-mini");
        let request = GenerateRequest {
            messages: vec![Message::new(Role::User, "hi")],
            max_tokens: Some(256),
            temperature: Some(0.7),
            model: Some("gpt-4o".to_string()),
        };

        let wire = client.convert_request(&request);

        assert_eq!(wire.model, "gpt-4o");
        assert_eq!(wire.temperature, Some(0.7));
        assert_eq!(wire.max_tokens, Some(256));
    }
}
