//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local chat API, for running local models
//! instead of a hosted service.
//!
//! # Examples
//!
//! ```no_run
//! use kickpredict_llm::OllamaProvider;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "llama3").unwrap();
//! ```

use crate::{status_error, LlmError};
use kickpredict_domain::{ChatMessage, ChatRequest, LlmProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model when none is configured
pub const DEFAULT_MODEL: &str = "llama3";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Ollama API provider for local LLM inference
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for Ollama chat API
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Response from Ollama chat API
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaReply,
}

#[derive(Deserialize)]
struct OllamaReply {
    content: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider whose HTTP requests give up after `timeout`
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Create a new Ollama provider on `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    fn model(&self) -> &str {
        &self.model
    }

    /// Send the conversation to `POST {endpoint}/api/chat`
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - Model is not available
    /// - Response format is invalid
    async fn chat(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        let url = format!("{}/api/chat", self.endpoint);
        let body = OllamaChatRequest {
            model: &self.model,
            messages: &request.messages,
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        debug!(model = %self.model, messages = request.messages.len(), "Sending Ollama chat request");
        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response, &self.model).await);
        }

        let reply: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(reply.message.content)
    }
}
