//! Kickpredict Rust SDK
//!
//! Client library for the Kickstarter success-prediction service.
//!
//! The service exposes four endpoints: `/health`, `/info/categories`,
//! `/train` and `/predict`. [`PredictorClient`] calls them directly;
//! [`CategoryCatalog`] wraps the client with the caching and offline
//! fallbacks the chat front-end relies on.
//!
//! # Example
//!
//! ```no_run
//! use kickpredict_sdk::{CategoryCatalog, PredictorClient};
//!
//! # async fn example() -> Result<(), kickpredict_sdk::SdkError> {
//! let client = PredictorClient::new("http://localhost:8000")?;
//! let catalog = CategoryCatalog::new(client);
//!
//! if catalog.health().await?.model_loaded {
//!     for category in catalog.categories().await {
//!         println!("{}: {}", category.value, category.avg_success);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod catalog;
mod client;
mod error;

pub use catalog::{
    builtin_categories, CategoryCatalog, BUILTIN_CATEGORIES, CATEGORIES_TTL, DEFAULT_AVG_SUCCESS,
    HEALTH_TTL,
};
pub use client::{
    PredictorClient, CATEGORIES_TIMEOUT, DEFAULT_API_URL, HEALTH_TIMEOUT, PREDICT_TIMEOUT,
    TRAIN_TIMEOUT,
};
pub use error::SdkError;
