//! Train command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use kickpredict_sdk::CategoryCatalog;

/// Execute the train command.
///
/// Training runs on the service in the background; a refusal is reported
/// with the service's response body.
pub async fn execute_train(catalog: &CategoryCatalog, formatter: &Formatter) -> Result<()> {
    let response = catalog.client().train().await?;
    catalog.invalidate_health().await;

    match formatter.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Quiet => println!("{}", response.message),
        OutputFormat::Table => {
            println!("{}", formatter.success(&response.message));
            println!(
                "{}",
                formatter.info("Training takes about 2-5 minutes. Check progress with 'health'.")
            );
        }
    }
    Ok(())
}
