//! Result types for extraction

use crate::error::ExtractorError;
use kickpredict_domain::ProjectRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a record was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Local pattern matching
    Local,
    /// Remote LLM fallback
    Remote {
        /// Model that produced the record
        model: String,
    },
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMethod::Local => write!(f, "Regex (local/gratuito)"),
            ExtractionMethod::Remote { model } => write!(f, "LLM {} (fallback)", model),
        }
    }
}

/// A successfully extracted record
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The normalized project
    pub record: ProjectRecord,
    /// Strategy that produced it
    pub method: ExtractionMethod,
}

/// One link of the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Regex patterns over the preprocessed message
    Local,
    /// LLM extraction
    Remote,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Local => f.write_str("local"),
            Strategy::Remote => f.write_str("llm"),
        }
    }
}

/// Why a single strategy failed
#[derive(Debug)]
pub struct StrategyError {
    /// Strategy that was attempted
    pub strategy: Strategy,
    /// What went wrong
    pub error: ExtractorError,
}

/// Every strategy failed; no record was produced
#[derive(Debug)]
pub struct ExtractionFailure {
    /// Attempts in the order they were made
    pub attempts: Vec<StrategyError>,
}

impl ExtractionFailure {
    /// Whether the given strategy was attempted
    pub fn attempted(&self, strategy: Strategy) -> bool {
        self.attempts.iter().any(|a| a.strategy == strategy)
    }
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No extraction strategy succeeded")?;
        for (idx, attempt) in self.attempts.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, attempt.strategy, attempt.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExtractionFailure {}

/// Raw field captures before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub goal: Option<String>,
    pub country: Option<String>,
    pub launched: Option<String>,
    pub deadline: Option<String>,
    /// The goal capture is followed by a `k`/`mil` multiplier
    pub goal_thousands: bool,
}

impl RawFields {
    /// Required fields that were not captured
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("category", &self.category),
            ("goal", &self.goal),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required() {
        let fields = RawFields {
            name: Some("power".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.missing_required(), vec!["category", "goal"]);
    }

    #[test]
    fn test_failure_display_lists_strategies() {
        let failure = ExtractionFailure {
            attempts: vec![
                StrategyError {
                    strategy: Strategy::Local,
                    error: ExtractorError::MissingFields(vec!["name"]),
                },
                StrategyError {
                    strategy: Strategy::Remote,
                    error: ExtractorError::Timeout,
                },
            ],
        };
        assert_eq!(
            failure.to_string(),
            "No extraction strategy succeeded: local: Missing required fields: name; llm: LLM timeout"
        );
        assert!(failure.attempted(Strategy::Remote));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(ExtractionMethod::Local.to_string(), "Regex (local/gratuito)");
        let remote = ExtractionMethod::Remote {
            model: "gpt-3.5-turbo".to_string(),
        };
        assert_eq!(remote.to_string(), "LLM gpt-3.5-turbo (fallback)");
    }
}
