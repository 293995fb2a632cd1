//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Kickpredict CLI - Chat with the Kickstarter success predictor.
#[derive(Debug, Parser)]
#[command(name = "kickpredict")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Demo user to log in as (e.g. joao@example.com)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter the interactive chat (default)
    Chat,

    /// Send a single chat message and print the reply
    Ask(MessageArgs),

    /// Extract project data from a message without predicting
    Extract(ExtractArgs),

    /// Check whether the prediction model is loaded
    Health,

    /// Start model training on the prediction service
    Train,

    /// List categories and their historical success rates
    Categories,

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments carrying a free-text message.
#[derive(Debug, Parser)]
pub struct MessageArgs {
    /// Message text; several words are joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl MessageArgs {
    /// The message as one string
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub message: MessageArgs,

    /// Use only the local patterns, never the LLM
    #[arg(long)]
    pub no_llm: bool,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Prediction service URL
        #[arg(short, long)]
        url: String,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },

    /// Ping a profile's prediction service
    Check {
        /// Profile name (defaults to the active profile)
        name: Option<String>,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
