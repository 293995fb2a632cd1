//! Kickpredict Domain Layer
//!
//! Core value types shared by every other crate in the workspace. Nothing in
//! here performs I/O; infrastructure lives in `kickpredict-llm` and
//! `kickpredict-sdk`.
//!
//! ## Key Concepts
//!
//! - **ProjectRecord**: a normalized crowdfunding project, ready to be sent to
//!   the prediction service
//! - **Category**: the closed set of 15 Kickstarter main categories
//! - **CountryCode**: an uppercased 2-letter country code
//! - **Prediction**: the response shapes of the remote prediction service
//! - **CreatorProfile**: the history of a project creator, used to personalize
//!   replies
//! - **LlmProvider**: the trait every text-completion backend implements

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod country;
pub mod creator;
pub mod prediction;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use country::CountryCode;
pub use creator::{CreatorProfile, PastProject};
pub use prediction::{CategoryInfo, HealthStatus, PredictionResponse, SuccessBand, TrainResponse};
pub use record::{default_deadline, ProjectRecord, RecordError, DEFAULT_CAMPAIGN_DAYS};
pub use traits::{ChatMessage, ChatRequest, ChatRole, LlmProvider};
