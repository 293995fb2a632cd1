//! Kickpredict LLM Provider Layer
//!
//! Chat-completion backends behind the `LlmProvider` trait from
//! `kickpredict-domain`.
//!
//! # Providers
//!
//! - `OpenAiProvider`: OpenAI-compatible `/chat/completions`
//! - `OllamaProvider`: Local Ollama `/api/chat`
//! - `MockProvider`: Deterministic mock for testing
//! - `ConfiguredProvider`: whichever of the above the configuration selects
//!
//! # Examples
//!
//! ```
//! use kickpredict_llm::MockProvider;
//! use kickpredict_domain::{ChatMessage, ChatRequest, LlmProvider};
//!
//! # tokio_test_block(async {
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = ChatRequest::new(vec![ChatMessage::user("hi")]);
//! assert_eq!(provider.chat(&request).await.unwrap(), "Hello from LLM!");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod openai;
pub mod provider;

use kickpredict_domain::{ChatRequest, ChatRole, LlmProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use provider::{ConfiguredProvider, LlmBackend, LlmConfig};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request did not complete in time
    #[error("LLM request timed out")]
    Timeout,

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Non-success HTTP status
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Provider cannot be built from the given settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_decode() {
            LlmError::InvalidResponse(err.to_string())
        } else {
            LlmError::Communication(err.to_string())
        }
    }
}

/// Map a non-success response onto an error, consuming its body
pub(crate) async fn status_error(response: reqwest::Response, model: &str) -> LlmError {
    let status = response.status();
    match status {
        reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        _ => LlmError::Api {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        },
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Specific responses are keyed by the content of the last user message.
/// Every request is recorded for later inspection.
///
/// # Examples
///
/// ```
/// use kickpredict_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Create a MockProvider that fails every request without a specific response
    pub fn failing() -> Self {
        Self {
            default_response: None,
            ..Self::default()
        }
    }

    /// Wait this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Some(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), None);
    }

    /// Get the number of times chat was called
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<ChatRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Reset the recorded requests
    pub fn reset_call_count(&self) {
        lock(&self.requests).clear();
    }

    fn answer(&self, request: &ChatRequest) -> Result<String, LlmError> {
        lock(&self.requests).push(request.clone());

        let prompt = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let configured = lock(&self.responses).get(prompt).cloned();
        match configured {
            Some(Some(response)) => Ok(response),
            Some(None) => Err(LlmError::Other("Mock error".to_string())),
            None => self
                .default_response
                .clone()
                .ok_or_else(|| LlmError::Other("Mock error".to_string())),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn model(&self) -> &str {
        "mock"
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer(request)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
