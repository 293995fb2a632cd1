//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use kickpredict_extractor::Extractor;
use kickpredict_llm::ConfiguredProvider;

/// Execute the extract command.
///
/// Runs the extraction chain only; the prediction service is not contacted.
pub async fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let llm = if args.no_llm {
        None
    } else {
        ConfiguredProvider::from_config(&config.llm)?
    };
    let extractor = Extractor::new(llm, config.extractor.clone());

    let extraction = extractor.extract(&args.message.text()).await?;
    println!("{}", formatter.format_record(&extraction.record, &extraction.method)?);
    Ok(())
}
