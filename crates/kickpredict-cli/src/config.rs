//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use kickpredict_extractor::ExtractorConfig;
use kickpredict_llm::LlmConfig;
use kickpredict_sdk::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the active profile's API URL
pub const API_URL_ENV: &str = "KICKSTARTER_API_URL";

/// Supplies the OpenAI API key
pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// LLM backend used for fallback extraction and free chat
    #[serde(default)]
    pub llm: LlmConfig,

    /// Extraction pipeline settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// File this configuration was loaded from
    #[serde(skip)]
    path: Option<PathBuf>,
}

/// Prediction service connection profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Base URL of the prediction service
    pub api_url: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Conversation turns sent to the LLM as context
    #[serde(default = "default_chat_turns")]
    pub chat_turns: usize,

    /// Demo user logged in at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".kickpredict").join("config.toml"))
    }

    /// Load configuration from `path` (or the default path), or create default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Self::default()
        };

        config.extractor.validate()?;
        config.path = Some(path);
        Ok(config)
    }

    /// Save configuration to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// File backing this configuration, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Apply environment overrides, reading variables through `lookup`.
    ///
    /// `KICKSTARTER_API_URL` replaces the active profile's URL for this run;
    /// `OPENAI_API_KEY` fills the LLM key when the file has none.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.profiles
                .insert(self.active_profile.clone(), Profile { api_url: url });
        }
        if self.llm.api_key.is_none() {
            self.llm.api_key = lookup(OPENAI_KEY_ENV).filter(|v| !v.trim().is_empty());
        }
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                api_url: DEFAULT_API_URL.to_string(),
            },
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            llm: LlmConfig::default(),
            extractor: ExtractorConfig::default(),
            path: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
            chat_turns: 10,
            user: None,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_chat_turns() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickpredict_llm::LlmBackend;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.active_profile, "default");
        assert_eq!(config.get_active_profile().unwrap().api_url, DEFAULT_API_URL);
        assert!(config.settings.color);
        assert_eq!(config.settings.chat_turns, 10);
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();

        config.set_profile(
            "staging".to_string(),
            Profile {
                api_url: "http://staging:8000".to_string(),
            },
        );
        assert!(config.profiles.contains_key("staging"));

        config.switch_profile("staging".to_string()).unwrap();
        assert_eq!(config.active_profile, "staging");
    }

    #[test]
    fn test_switch_to_nonexistent_profile() {
        let mut config = Config::default();
        let result = config.switch_profile("nonexistent".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            API_URL_ENV => Some("http://api:9000".to_string()),
            OPENAI_KEY_ENV => Some("sk-env".to_string()),
            _ => None,
        });

        assert_eq!(config.get_active_profile().unwrap().api_url, "http://api:9000");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_file_key_wins_over_env() {
        let mut config = Config::default();
        config.llm.api_key = Some("sk-file".to_string());
        config.apply_env(|_| Some("sk-env".to_string()));
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-file"));
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.active_profile, "default");
        assert_eq!(config.path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::load(Some(&path)).unwrap();
        config.llm.backend = LlmBackend::Ollama;
        config.extractor.llm_fallback = false;
        config.settings.user = Some("maria@example.com".to_string());
        config.save().unwrap();

        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded.llm.backend, LlmBackend::Ollama);
        assert!(!reloaded.extractor.llm_fallback);
        assert_eq!(reloaded.settings.user.as_deref(), Some("maria@example.com"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
active_profile = "default"

[profiles.default]
api_url = "http://localhost:8000"

[llm]
backend = "none"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.llm.backend, LlmBackend::None);
        assert!(config.extractor.llm_fallback);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_extractor_section_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[extractor]\nllm_temperature = 5.0\n").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(CliError::Extractor(_))
        ));
    }
}
