//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kickpredict_sdk::PredictorClient;

/// Execute the profile command.
pub async fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set { name, url } => set_profile(config, name, url, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
        ProfileAction::Check { name } => check_profile(config, name, formatter).await,
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();

    println!("Available profiles:");
    for name in names {
        let profile = &config.profiles[name];
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    URL: {}", profile.api_url);
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    println!("  URL: {}", profile.api_url);

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(config: &mut Config, name: String, url: String, formatter: &Formatter) -> Result<()> {
    // Rejects URLs the client could not use later
    let client = PredictorClient::new(&url)?;

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(
        name.clone(),
        Profile {
            api_url: client.base_url().to_string(),
        },
    );
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

/// Query `/health` on a profile's service.
async fn check_profile(config: &Config, name: Option<String>, formatter: &Formatter) -> Result<()> {
    let name = name.unwrap_or_else(|| config.active_profile.clone());
    let profile = config
        .profiles
        .get(&name)
        .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", name)))?;

    let client = PredictorClient::new(&profile.api_url)?;
    match client.health().await {
        Ok(health) if health.model_loaded => {
            println!("{}", formatter.success(&format!("{}: model loaded", profile.api_url)));
        }
        Ok(_) => {
            println!(
                "{}",
                formatter.warning(&format!("{}: reachable, model not loaded", profile.api_url))
            );
        }
        Err(e) if e.is_unavailable() => {
            println!(
                "{}",
                formatter.error(&format!("{}: unreachable ({})", profile.api_url, e))
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        Config::load(Some(&dir.path().join("config.toml"))).unwrap()
    }

    #[test]
    fn test_set_and_switch_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "staging".to_string(),
            "http://staging:8000/".to_string(),
            &formatter,
        )
        .unwrap();
        assert_eq!(config.profiles["staging"].api_url, "http://staging:8000");

        switch_profile(&mut config, "staging".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "staging");

        let reloaded = temp_config(&dir);
        assert_eq!(reloaded.active_profile, "staging");
    }

    #[test]
    fn test_set_profile_rejects_bad_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_profile(&mut config, "bad".to_string(), "staging:8000".to_string(), &formatter);
        assert!(result.is_err());
        assert!(!config.profiles.contains_key("bad"));
    }

    #[tokio::test]
    async fn test_check_unknown_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = check_profile(&config, Some("missing".to_string()), &formatter).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[tokio::test]
    async fn test_check_unreachable_profile_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        config.set_profile(
            "down".to_string(),
            Profile {
                api_url: "http://127.0.0.1:1".to_string(),
            },
        );
        let formatter = Formatter::new(OutputFormat::Table, false);

        assert!(check_profile(&config, Some("down".to_string()), &formatter).await.is_ok());
    }

    #[test]
    fn test_delete_active_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
    }
}
