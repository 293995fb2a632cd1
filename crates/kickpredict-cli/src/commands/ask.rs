//! Ask command implementation.

use crate::assistant::Assistant;
use crate::cli::MessageArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::SessionContext;
use kickpredict_domain::LlmProvider;

/// Execute the ask command: one message, one reply.
pub async fn execute_ask<L: LlmProvider + Clone>(
    args: MessageArgs,
    assistant: &Assistant<L>,
    session: &mut SessionContext,
    formatter: &Formatter,
) -> Result<()> {
    let reply = assistant.respond(session, &args.text()).await;
    println!("{}", formatter.reply(&reply));
    Ok(())
}
