//! Error types for the Extractor

use kickpredict_domain::RecordError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Message exceeds maximum length
    #[error("Message too long: {0} chars (max: {1})")]
    MessageTooLong(usize, usize),

    /// Required fields were not found in the message
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Goal text is not a positive number
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// Date text is not a valid `YYYY-MM-DD` date
    #[error("Invalid {field} date: {value}")]
    InvalidDate {
        /// Which date field
        field: &'static str,
        /// Text that failed to parse
        value: String,
    },

    /// Country text is not a 2-letter code
    #[error("Invalid country: {0}")]
    InvalidCountry(String),

    /// Extracted values violate the record invariants
    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM call did not finish in time
    #[error("LLM timeout")]
    Timeout,

    /// LLM response did not contain the expected JSON
    #[error("Invalid LLM response: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
