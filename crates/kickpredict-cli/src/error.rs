//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Prediction service error
    #[error("API error: {0}")]
    Sdk(#[from] kickpredict_sdk::SdkError),

    /// LLM backend error
    #[error("LLM error: {0}")]
    Llm(#[from] kickpredict_llm::LlmError),

    /// Extraction found no usable project data
    #[error("{0}")]
    Extraction(#[from] kickpredict_extractor::ExtractionFailure),

    /// Extractor settings are invalid
    #[error("Extractor error: {0}")]
    Extractor(#[from] kickpredict_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),

    /// Unknown demo user
    #[error("Unknown user: {0}")]
    UnknownUser(String),
}
