//! Prediction service client implementation.

use crate::error::SdkError;
use kickpredict_domain::{CategoryInfo, HealthStatus, PredictionResponse, ProjectRecord, TrainResponse};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Timeout of `GET /health`
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout of `GET /info/categories`, also the client default
pub const CATEGORIES_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout of `POST /train`
pub const TRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout of `POST /predict`
pub const PREDICT_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Deserialize)]
struct CategoriesResponse {
    categories: Vec<CategoryInfo>,
}

/// Kickpredict SDK client
///
/// Every call is a single attempt; there are no retries.
#[derive(Debug, Clone)]
pub struct PredictorClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl PredictorClient {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SdkError::InvalidUrl(base_url.to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(CATEGORIES_TIMEOUT)
            .build()
            .map_err(|e| SdkError::ConnectionError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.to_string(),
            http_client,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, SdkError> {
        let response = self
            .http_client
            .get(self.url("/health"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch the category list from `GET /info/categories`
    pub async fn categories(&self) -> Result<Vec<CategoryInfo>, SdkError> {
        let response = self
            .http_client
            .get(self.url("/info/categories"))
            .timeout(CATEGORIES_TIMEOUT)
            .send()
            .await?;

        let body: CategoriesResponse = decode(response).await?;
        Ok(body.categories)
    }

    /// Start model training with `POST /train`
    ///
    /// Training runs asynchronously on the service; poll [`health`](Self::health)
    /// to learn when the model is loaded. Non-success responses are returned
    /// verbatim in [`SdkError::TrainingError`].
    pub async fn train(&self) -> Result<TrainResponse, SdkError> {
        let response = self
            .http_client
            .post(self.url("/train"))
            .timeout(TRAIN_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::TrainingError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Score a project with `POST /predict`
    pub async fn predict(&self, record: &ProjectRecord) -> Result<PredictionResponse, SdkError> {
        debug!(name = record.name(), "Requesting prediction");

        let response = self
            .http_client
            .post(self.url("/predict"))
            .timeout(PREDICT_TIMEOUT)
            .json(record)
            .send()
            .await?;

        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body, or turn the status and body into an error
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SdkError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(SdkError::ApiError {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = PredictorClient::new(" http://localhost:8000/ ").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            PredictorClient::new("localhost:8000"),
            Err(SdkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_categories_response_parsing() {
        let json = r#"{
            "categories": [
                {"value": "Games", "description": "Jogos", "avg_success": "44%"},
                {"value": "Music"}
            ]
        }"#;

        let response: CategoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.categories[0].avg_success, "44%");
        assert_eq!(response.categories[1].description, "");
    }
}
