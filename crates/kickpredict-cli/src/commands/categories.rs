//! Categories command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kickpredict_sdk::CategoryCatalog;

/// Execute the categories command.
///
/// Falls back to the built-in table when the service is unreachable.
pub async fn execute_categories(catalog: &CategoryCatalog, formatter: &Formatter) -> Result<()> {
    let categories = catalog.categories().await;
    println!("{}", formatter.format_categories(&categories)?);
    Ok(())
}
