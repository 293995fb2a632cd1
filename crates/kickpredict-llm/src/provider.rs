//! Runtime provider selection
//!
//! The backend is chosen from configuration, so callers hold a single
//! concrete type instead of a trait object.

use crate::{ollama, openai, LlmError, MockProvider, OllamaProvider, OpenAiProvider};
use kickpredict_domain::{ChatRequest, LlmProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Which LLM backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmBackend {
    /// OpenAI-compatible chat completions
    #[default]
    OpenAi,
    /// Local Ollama server
    Ollama,
    /// No LLM; regex extraction and canned replies only
    None,
}

/// LLM section of the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Backend to use
    pub backend: LlmBackend,
    /// Model name; the backend default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API base URL or Ollama endpoint; the backend default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key (OpenAI only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: LlmBackend::OpenAi,
            model: None,
            base_url: None,
            api_key: None,
            timeout_secs: openai::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// An LLM provider selected at runtime
#[derive(Debug, Clone)]
pub enum ConfiguredProvider {
    /// OpenAI-compatible backend
    OpenAi(OpenAiProvider),
    /// Ollama backend
    Ollama(OllamaProvider),
    /// Mock backend, for tests and demos
    Mock(MockProvider),
}

impl ConfiguredProvider {
    /// Build the provider described by `config`
    ///
    /// Returns `Ok(None)` when no LLM is configured: the backend is `none`, or
    /// the OpenAI backend has no API key.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>, LlmError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let provider = match config.backend {
            LlmBackend::None => return Ok(None),
            LlmBackend::OpenAi => {
                let Some(key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
                    info!("No OpenAI API key configured, LLM features disabled");
                    return Ok(None);
                };
                ConfiguredProvider::OpenAi(OpenAiProvider::with_settings(
                    config.base_url.as_deref().unwrap_or(openai::DEFAULT_BASE_URL),
                    key,
                    config.model.as_deref().unwrap_or(openai::DEFAULT_MODEL),
                    timeout,
                )?)
            }
            LlmBackend::Ollama => ConfiguredProvider::Ollama(OllamaProvider::with_timeout(
                config.base_url.as_deref().unwrap_or(ollama::DEFAULT_ENDPOINT),
                config.model.as_deref().unwrap_or(ollama::DEFAULT_MODEL),
                timeout,
            )?),
        };
        info!(model = provider.model(), "LLM provider configured");
        Ok(Some(provider))
    }
}

impl LlmProvider for ConfiguredProvider {
    type Error = LlmError;

    fn model(&self) -> &str {
        match self {
            ConfiguredProvider::OpenAi(p) => p.model(),
            ConfiguredProvider::Ollama(p) => p.model(),
            ConfiguredProvider::Mock(p) => p.model(),
        }
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        match self {
            ConfiguredProvider::OpenAi(p) => p.chat(request).await,
            ConfiguredProvider::Ollama(p) => p.chat(request).await,
            ConfiguredProvider::Mock(p) => p.chat(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_backend_disables_llm() {
        let config = LlmConfig {
            backend: LlmBackend::None,
            ..Default::default()
        };
        assert!(ConfiguredProvider::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_openai_without_key_disables_llm() {
        let config = LlmConfig::default();
        assert!(ConfiguredProvider::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_openai_with_key() {
        let config = LlmConfig {
            api_key: Some("sk-test".to_string()),
            model: Some("gpt-4o-mini".to_string()),
            ..Default::default()
        };
        let provider = ConfiguredProvider::from_config(&config).unwrap().unwrap();
        assert!(matches!(provider, ConfiguredProvider::OpenAi(_)));
        assert_eq!(provider.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_ollama_defaults() {
        let config = LlmConfig {
            backend: LlmBackend::Ollama,
            ..Default::default()
        };
        let provider = ConfiguredProvider::from_config(&config).unwrap().unwrap();
        assert_eq!(provider.model(), ollama::DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: LlmConfig =
            serde_json::from_str(r#"{"backend":"ollama","model":"mistral"}"#).unwrap();
        assert_eq!(config.backend, LlmBackend::Ollama);
        assert_eq!(config.timeout_secs, openai::DEFAULT_TIMEOUT_SECS);
    }
}
