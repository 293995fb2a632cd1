//! Interactive chat REPL.

use crate::assistant::Assistant;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::render;
use crate::session::SessionContext;
use kickpredict_domain::LlmProvider;
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::warn;

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Show the command list
    Help,
    /// Log in as a demo user
    Login(String),
    /// Return to the anonymous profile
    Logout,
    /// Show the logged-in user
    WhoAmI,
    /// List categories
    Categories,
    /// Query model health
    Health,
    /// Start training
    Train,
    /// Title suggestions for the last project
    Titles,
    /// Campaign plan for the last project
    Strategy,
    /// Detailed analysis of the last project
    Analyze,
    /// Forget the conversation
    Clear,
    /// A chat message
    Chat(String),
}

impl ReplCommand {
    /// Whether the command works before the model is trained
    pub fn allowed_without_model(&self) -> bool {
        matches!(
            self,
            ReplCommand::Exit | ReplCommand::Help | ReplCommand::Health | ReplCommand::Train
        )
    }
}

/// Parse a REPL line. Lines not starting with `/` are chat messages.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    if matches!(line, "exit" | "quit") {
        return Ok(ReplCommand::Exit);
    }

    let Some(command) = line.strip_prefix('/') else {
        return Ok(ReplCommand::Chat(line.to_string()));
    };

    let parts: Vec<&str> = command.split_whitespace().collect();
    let name = parts.first().copied().unwrap_or_default();

    match name {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "login" => match parts.get(1) {
            Some(email) => Ok(ReplCommand::Login(email.to_string())),
            None => Err(CliError::InvalidInput("Usage: /login <email>".to_string())),
        },
        "logout" => Ok(ReplCommand::Logout),
        "whoami" => Ok(ReplCommand::WhoAmI),
        "categories" => Ok(ReplCommand::Categories),
        "health" => Ok(ReplCommand::Health),
        "train" => Ok(ReplCommand::Train),
        "titles" => Ok(ReplCommand::Titles),
        "strategy" => Ok(ReplCommand::Strategy),
        "analyze" => Ok(ReplCommand::Analyze),
        "clear" => Ok(ReplCommand::Clear),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: /{}. Type /help for available commands.",
            name
        ))),
    }
}

/// Run the interactive REPL.
pub async fn run_repl<L: LlmProvider + Clone>(
    config: &Config,
    formatter: &Formatter,
    assistant: &Assistant<L>,
    session: &mut SessionContext,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Kickpredict - Type /help for commands, /exit to quit")
    );
    println!();
    println!("{}", formatter.reply(render::GREETING));
    if let Some(profile) = session.creator() {
        println!("{}", formatter.reply(&render::welcome_back(profile)));
    }
    println!();

    let mut model_ready = check_model(assistant, formatter).await;

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = if model_ready {
            "kickpredict> "
        } else {
            "kickpredict (model not loaded)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                let command = match parse_repl_command(line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                        continue;
                    }
                };

                if command == ReplCommand::Exit {
                    println!("{}", formatter.info("Até logo!"));
                    break;
                }

                if !model_ready && !command.allowed_without_model() {
                    println!("{}", formatter.warning(render::MODEL_NOT_LOADED));
                    continue;
                }

                if let Err(e) =
                    execute_repl_command(command, assistant, session, formatter, &mut model_ready).await
                {
                    eprintln!("{}", formatter.error(&e.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use /exit to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Query health at startup, printing the training notice when needed.
async fn check_model<L: LlmProvider + Clone>(
    assistant: &Assistant<L>,
    formatter: &Formatter,
) -> bool {
    match assistant.catalog().refresh_health().await {
        Ok(health) if health.model_loaded => true,
        Ok(_) => {
            println!("{}", formatter.warning(render::MODEL_NOT_LOADED));
            false
        }
        Err(error) => {
            warn!(%error, "Health check failed");
            println!(
                "{}",
                formatter.warning(&format!("API indisponível: {}", error))
            );
            println!("{}", formatter.warning(render::MODEL_NOT_LOADED));
            false
        }
    }
}

/// Execute one REPL command.
async fn execute_repl_command<L: LlmProvider + Clone>(
    command: ReplCommand,
    assistant: &Assistant<L>,
    session: &mut SessionContext,
    formatter: &Formatter,
    model_ready: &mut bool,
) -> Result<()> {
    match command {
        ReplCommand::Exit => {}
        ReplCommand::Help => print_help(formatter),
        ReplCommand::Login(email) => {
            let profile = session.login(&email)?;
            println!("{}", formatter.success(&render::welcome_back(profile)));
        }
        ReplCommand::Logout => {
            session.logout();
            println!("{}", formatter.info("Sessão encerrada; usando o perfil anônimo."));
        }
        ReplCommand::WhoAmI => match session.creator() {
            Some(profile) => println!("{}", formatter.reply(&render::welcome_back(profile))),
            None => println!(
                "{}",
                formatter.info(&format!("Não logado (perfil: {})", session.profile().name))
            ),
        },
        ReplCommand::Categories => {
            commands::execute_categories(assistant.catalog(), formatter).await?;
        }
        ReplCommand::Health => {
            *model_ready = commands::execute_health(assistant.catalog(), formatter).await?;
        }
        ReplCommand::Train => {
            commands::execute_train(assistant.catalog(), formatter).await?;
        }
        ReplCommand::Titles => {
            println!("{}", formatter.reply(&assistant.titles(session).await));
        }
        ReplCommand::Strategy => {
            println!("{}", formatter.reply(&assistant.strategy(session).await));
        }
        ReplCommand::Analyze => {
            println!("{}", formatter.reply(&assistant.analyze(session).await));
        }
        ReplCommand::Clear => {
            session.clear();
            println!("{}", formatter.info("Conversa apagada."));
        }
        ReplCommand::Chat(message) => {
            let reply = assistant.respond(session, &message).await;
            println!("{}", formatter.reply(&reply));
        }
    }

    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let app_dir = home.join(".kickpredict");
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <message>              - Chat; include project data to get a prediction");
    println!("  /login <email>         - Log in as a demo user (joao@, maria@, pedro@example.com)");
    println!("  /logout                - Return to the anonymous profile");
    println!("  /whoami                - Show the logged-in user");
    println!("  /categories            - List categories and success rates");
    println!("  /health                - Check whether the model is loaded");
    println!("  /train                 - Start model training");
    println!("  /titles                - Suggest titles for the last project");
    println!("  /strategy              - Campaign plan for the last project");
    println!("  /analyze               - Detailed analysis of the last project");
    println!("  /clear                 - Forget the conversation");
    println!("  /help, /?              - Show this help");
    println!("  /exit, exit, quit      - Exit");
    println!();
    println!("Example:");
    println!("  Analise meu projeto: Nome: power Categoria: Games Meta: $10,000 País: US");
    println!();
}
