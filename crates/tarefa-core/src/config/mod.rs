mod defaults;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::TarefaError;
use crate::lang::LanguageCode;
use defaults::*;

/// Top-level Tarefa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub channels: ChannelConfig,
    /// User directory: platform user id to display name. Commands that
    /// act on "known users" (/mark, /admtask, /resetalltasks, /report)
    /// consult this table.
    #[serde(default)]
    pub users: BTreeMap<String, String>,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Directory holding the persisted documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Locale resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language used when a user has no recorded preference.
    #[serde(default)]
    pub default: LanguageCode,
    /// Directory holding one `<code>.json` translation table per language.
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: LanguageCode::default(),
            locales_dir: default_locales_dir(),
        }
    }
}

/// Channel restriction for channel-bound commands. An empty list means
/// unrestricted (the CLI and tests run without platform channels).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl Config {
    /// Path of the task-status document.
    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir().join("tasks_status.json")
    }

    /// Path of the language-preference document.
    pub fn language_data_path(&self) -> PathBuf {
        self.data_dir().join("language_data.json")
    }

    fn data_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand(&self.bot.data_dir))
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, TarefaError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| TarefaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| TarefaError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
