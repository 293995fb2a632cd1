//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Ask the LLM when the local patterns fail
    pub llm_fallback: bool,

    /// Maximum time for the LLM extraction call (seconds)
    pub llm_timeout_secs: u64,

    /// Sampling temperature for the LLM extraction call
    pub llm_temperature: f32,

    /// Maximum input message length (characters)
    pub max_message_length: usize,
}

impl ExtractorConfig {
    /// Get the LLM timeout as a Duration
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_message_length == 0 {
            return Err(ExtractorError::Config(
                "max_message_length must be greater than 0".to_string(),
            ));
        }
        if self.llm_timeout_secs == 0 {
            return Err(ExtractorError::Config(
                "llm_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(ExtractorError::Config(format!(
                "llm_temperature {} out of range [0.0, 2.0]",
                self.llm_temperature
            )));
        }
        Ok(())
    }

    /// Preset that never calls the LLM
    pub fn regex_only() -> Self {
        Self {
            llm_fallback: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            llm_fallback: true,
            llm_timeout_secs: 30,
            llm_temperature: 0.1,
            max_message_length: 5_000,
        }
    }
}
