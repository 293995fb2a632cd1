//! Health command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kickpredict_sdk::CategoryCatalog;

/// Execute the health command, bypassing the health cache.
///
/// Returns whether the model is loaded.
pub async fn execute_health(catalog: &CategoryCatalog, formatter: &Formatter) -> Result<bool> {
    let health = catalog.refresh_health().await?;
    println!("{}", formatter.format_health(&health)?);
    Ok(health.model_loaded)
}
