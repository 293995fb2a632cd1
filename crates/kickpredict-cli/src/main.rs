//! Kickpredict CLI - Chat with the Kickstarter success predictor.

use clap::Parser;
use kickpredict_cli::commands;
use kickpredict_cli::repl;
use kickpredict_cli::{Assistant, Cli, Command, Config, Formatter, SessionContext};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> kickpredict_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;
    if config.path().is_some_and(|path| !path.exists()) {
        config.save().ok();
    }
    config.apply_env(|key| std::env::var(key).ok());

    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter).await?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &config, &formatter).await?;
        }
        Some(Command::Health) => {
            let assistant = Assistant::from_config(&config)?;
            commands::execute_health(assistant.catalog(), &formatter).await?;
        }
        Some(Command::Train) => {
            let assistant = Assistant::from_config(&config)?;
            commands::execute_train(assistant.catalog(), &formatter).await?;
        }
        Some(Command::Categories) => {
            let assistant = Assistant::from_config(&config)?;
            commands::execute_categories(assistant.catalog(), &formatter).await?;
        }
        Some(Command::Ask(args)) => {
            let assistant = Assistant::from_config(&config)?;
            let mut session = start_session(&config, cli.user.as_deref())?;
            commands::execute_ask(args, &assistant, &mut session, &formatter).await?;
        }
        None | Some(Command::Chat) => {
            let assistant = Assistant::from_config(&config)?;
            let mut session = start_session(&config, cli.user.as_deref())?;
            repl::run_repl(&config, &formatter, &assistant, &mut session).await?;
        }
    }

    Ok(())
}

/// New session, logged in as `--user` or the configured user.
fn start_session(config: &Config, user: Option<&str>) -> kickpredict_cli::Result<SessionContext> {
    let mut session = SessionContext::new(config.settings.chat_turns);
    if let Some(email) = user.or(config.settings.user.as_deref()) {
        session.login(email)?;
    }
    Ok(session)
}
