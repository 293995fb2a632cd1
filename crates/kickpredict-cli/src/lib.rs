//! Kickpredict CLI library.
//!
//! Chat front-end for the Kickstarter success predictor: configuration
//! profiles, the chat assistant, command execution and output formatting.

pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompts;
pub mod render;
pub mod repl;
pub mod session;
pub mod users;

pub use assistant::Assistant;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::{Analysis, SessionContext};
pub use users::{find_user, DemoUser, DEMO_USERS};
