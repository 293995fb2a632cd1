//! Kickpredict Extractor
//!
//! Turns a free-text chat message into a normalized [`ProjectRecord`].
//!
//! # Overview
//!
//! Users describe their crowdfunding project in whatever words they like,
//! usually in Portuguese. The extractor pulls out the name, category, goal,
//! country and campaign dates, and normalizes them into a record the
//! prediction service accepts.
//!
//! # Architecture
//!
//! ```text
//! message → corrections → field patterns → normalization → ProjectRecord
//!                                  │ (fails)
//!                                  └→ LLM JSON extraction → ProjectRecord
//!                                            │ (fails)
//!                                            └→ ExtractionFailure
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use kickpredict_extractor::{Extractor, ExtractorConfig};
//! use kickpredict_llm::ConfiguredProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor: Extractor<ConfiguredProvider> =
//!     Extractor::new(None, ExtractorConfig::regex_only());
//!
//! let extraction = extractor
//!     .extract("Nome: power Categoria: Games Meta: $10,000")
//!     .await?;
//!
//! println!("{} via {}", extraction.record.name(), extraction.method);
//! # Ok(())
//! # }
//! ```
//!
//! [`ProjectRecord`]: kickpredict_domain::ProjectRecord

#![warn(missing_docs)]

mod config;
mod corrections;
mod error;
mod extractor;
mod normalize;
mod parser;
mod patterns;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use corrections::{preprocess, CORRECTIONS};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use normalize::{has_thousands_suffix, parse_date, parse_goal, scale_thousands};
pub use parser::{parse_llm_response, DEFAULT_GOAL, DEFAULT_NAME};
pub use patterns::{Field, FieldPatterns, FIELD_PATTERNS};
pub use prompt::PromptBuilder;
pub use types::{Extraction, ExtractionFailure, ExtractionMethod, Strategy, StrategyError};
