//! Error types for the Kickpredict SDK.

use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// Connection error (network, DNS, refused, etc.)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service did not answer in time
    #[error("Request timed out")]
    Timeout,

    /// Non-success status from the prediction service
    #[error("API error (HTTP {status}): {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// `/train` refused to start training; the body is kept verbatim
    #[error("Training error (HTTP {status}): {body}")]
    TrainingError {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Body could not be decoded into the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Base URL is not usable
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl SdkError {
    /// Whether the service could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SdkError::ConnectionError(_) | SdkError::Timeout)
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SdkError::Timeout
        } else if e.is_connect() {
            SdkError::ConnectionError(e.to_string())
        } else if e.is_decode() {
            SdkError::InvalidResponse(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => SdkError::ApiError {
                    status: status.as_u16(),
                    body: e.to_string(),
                },
                None => SdkError::ConnectionError(e.to_string()),
            }
        } else {
            SdkError::ConnectionError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}
