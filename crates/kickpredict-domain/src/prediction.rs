//! Prediction module - response shapes of the remote prediction service

use crate::Category;
use serde::{Deserialize, Serialize};

/// Result of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Probability of reaching the goal, in `[0, 1]`
    pub success_probability: f64,
    /// Predicted label, e.g. "Sucesso" or "Falha"
    pub prediction: String,
    /// Confidence label reported by the model
    pub confidence: String,
    /// Probability cutoff the model used
    pub threshold_used: f64,
    /// Suggestions for improving the campaign
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Outlook band derived from the success probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessBand {
    /// Probability of at least 60%
    High,
    /// Probability of at least 50%
    Moderate,
    /// Probability of at least 30%
    Low,
    /// Anything lower
    HighRisk,
}

impl SuccessBand {
    /// Band for a probability
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.6 {
            SuccessBand::High
        } else if probability >= 0.5 {
            SuccessBand::Moderate
        } else if probability >= 0.3 {
            SuccessBand::Low
        } else {
            SuccessBand::HighRisk
        }
    }
}

impl PredictionResponse {
    /// Outlook band of this prediction
    pub fn band(&self) -> SuccessBand {
        SuccessBand::from_probability(self.success_probability)
    }

    /// Signed distance between the probability and the threshold
    pub fn margin(&self) -> f64 {
        self.success_probability - self.threshold_used
    }
}

/// Result of `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Whether a trained model is loaded and predictions can be served
    #[serde(default)]
    pub model_loaded: bool,
    /// Any other fields the service reports
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry of `GET /info/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Canonical category label
    pub value: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Historical success rate, formatted like "42%"
    #[serde(default)]
    pub avg_success: String,
}

impl CategoryInfo {
    /// The category this entry describes, if the label is canonical
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.value)
    }
}

/// Result of `POST /train`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    /// Status message from the service
    pub message: String,
}
