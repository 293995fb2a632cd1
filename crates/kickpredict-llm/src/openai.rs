//! OpenAI-compatible chat completion provider
//!
//! Talks to `POST {base_url}/chat/completions` with a bearer key. Any server
//! implementing the same API (vLLM, LM Studio, ...) works by changing the
//! base URL.

use crate::{status_error, LlmError};
use kickpredict_domain::{ChatMessage, ChatRequest, LlmProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default timeout for requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OpenAI chat completions provider
#[derive(Clone)]
pub struct OpenAiProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider for the official API with the default model
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_settings(
            DEFAULT_BASE_URL,
            api_key,
            DEFAULT_MODEL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a provider with explicit base URL, model and request timeout
    pub fn with_settings(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Config("OpenAI API key is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
            client,
        })
    }

    /// Configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %self.model, messages = request.messages.len(), "Sending chat completion request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response, &self.model).await);
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("Empty completion".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let provider = OpenAiProvider::new("sk-test").unwrap();
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
        assert_eq!(provider.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            OpenAiProvider::new("  "),
            Err(LlmError::Config(_))
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let provider = OpenAiProvider::new("sk-secret").unwrap();
        assert!(!format!("{:?}", provider).contains("sk-secret"));
    }
}
