//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::corrections::preprocess;
use crate::error::ExtractorError;
use crate::normalize::{parse_date, parse_goal, scale_thousands};
use crate::parser::parse_llm_response;
use crate::patterns::capture_fields;
use crate::prompt::PromptBuilder;
use crate::types::{Extraction, ExtractionFailure, ExtractionMethod, Strategy, StrategyError};
use chrono::{Local, NaiveDate};
use kickpredict_domain::{default_deadline, Category, CountryCode, LlmProvider, ProjectRecord};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Extractor turns a free-text message into a project record
///
/// Local pattern matching runs first; when it fails and an LLM is configured
/// with fallback enabled, the LLM is asked for a JSON object instead.
pub struct Extractor<L: LlmProvider> {
    llm: Option<L>,
    config: ExtractorConfig,
}

impl<L: LlmProvider> Extractor<L> {
    /// Create a new Extractor
    pub fn new(llm: Option<L>, config: ExtractorConfig) -> Self {
        Self { llm, config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Whether the LLM fallback can run
    pub fn has_llm_fallback(&self) -> bool {
        self.config.llm_fallback && self.llm.is_some()
    }

    /// Extract a record, trying each strategy in turn
    pub async fn extract(&self, message: &str) -> Result<Extraction, ExtractionFailure> {
        self.extract_on(message, Local::now().date_naive()).await
    }

    /// Like [`Extractor::extract`], with `today` used for date defaults
    pub async fn extract_on(
        &self,
        message: &str,
        today: NaiveDate,
    ) -> Result<Extraction, ExtractionFailure> {
        let length = message.chars().count();
        if length > self.config.max_message_length {
            return Err(ExtractionFailure {
                attempts: vec![StrategyError {
                    strategy: Strategy::Local,
                    error: ExtractorError::MessageTooLong(length, self.config.max_message_length),
                }],
            });
        }

        let mut attempts = Vec::new();

        match self.extract_local_on(message, today) {
            Ok(record) => {
                info!(name = record.name(), "Local extraction succeeded");
                return Ok(Extraction {
                    record,
                    method: ExtractionMethod::Local,
                });
            }
            Err(error) => {
                info!(%error, "Local extraction failed");
                attempts.push(StrategyError {
                    strategy: Strategy::Local,
                    error,
                });
            }
        }

        if let Some(llm) = self.llm.as_ref().filter(|_| self.config.llm_fallback) {
            match self.extract_remote(llm, message, today).await {
                Ok(record) => {
                    info!(name = record.name(), model = llm.model(), "LLM extraction succeeded");
                    return Ok(Extraction {
                        record,
                        method: ExtractionMethod::Remote {
                            model: llm.model().to_string(),
                        },
                    });
                }
                Err(error) => {
                    warn!(%error, model = llm.model(), "LLM extraction failed");
                    attempts.push(StrategyError {
                        strategy: Strategy::Remote,
                        error,
                    });
                }
            }
        }

        Err(ExtractionFailure { attempts })
    }

    /// Run only the local pattern strategy
    pub fn extract_local(&self, message: &str) -> Result<ProjectRecord, ExtractorError> {
        self.extract_local_on(message, Local::now().date_naive())
    }

    /// Run only the local pattern strategy, with `today` used for date defaults
    pub fn extract_local_on(
        &self,
        message: &str,
        today: NaiveDate,
    ) -> Result<ProjectRecord, ExtractorError> {
        let processed = preprocess(message);
        debug!(original = message, processed = %processed, "Preprocessed message");

        let fields = capture_fields(&processed);
        let missing = fields.missing_required();
        if !missing.is_empty() {
            return Err(ExtractorError::MissingFields(missing));
        }

        // Required fields are present past the gate
        let name = fields.name.unwrap_or_default();
        let raw_category = fields.category.unwrap_or_default();
        let mut raw_goal = fields.goal.unwrap_or_default();

        if fields.goal_thousands {
            raw_goal = scale_thousands(&raw_goal)?;
        }
        let goal = parse_goal(&raw_goal)?;
        let category = Category::normalize(&raw_category);

        let country = match fields.country {
            Some(raw) => CountryCode::parse(&raw).ok_or(ExtractorError::InvalidCountry(raw))?,
            None => CountryCode::default(),
        };

        let launched = match fields.launched {
            Some(raw) => parse_date("launched", &raw)?,
            None => today,
        };
        let deadline = match fields.deadline {
            Some(raw) => parse_date("deadline", &raw)?,
            None => default_deadline(launched)?,
        };

        Ok(ProjectRecord::new(name, category, country, goal, launched, deadline)?)
    }

    async fn extract_remote(
        &self,
        llm: &L,
        message: &str,
        today: NaiveDate,
    ) -> Result<ProjectRecord, ExtractorError> {
        let request = PromptBuilder::new(message)
            .with_temperature(self.config.llm_temperature)
            .build();

        let response = timeout(self.config.llm_timeout(), llm.chat(&request))
            .await
            .map_err(|_| ExtractorError::Timeout)?
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!(response_len = response.len(), "LLM extraction response");
        parse_llm_response(&response, today)
    }
}
