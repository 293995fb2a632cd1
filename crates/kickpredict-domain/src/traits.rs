//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use serde::{Deserialize, Serialize};
use std::future::Future;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions for the model
    System,
    /// Text typed by the user
    User,
    /// A previous model reply
    Assistant,
}

/// One role-tagged message of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the message
    pub role: ChatRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// A system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// A user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// An assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Conversation, oldest first
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens, if any
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with temperature 0.7 and no token limit
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: 0.7,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Limit the number of generated tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (kickpredict-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the model answering requests
    fn model(&self) -> &str;

    /// Send a conversation and return the reply text
    fn chat(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
