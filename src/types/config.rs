//! Configuration for the assistant.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::AssistantResult;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "assistant.toml";

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Contact bot settings.
    #[serde(default)]
    pub bot: BotConfig,

    /// Log analyzer settings.
    #[serde(default)]
    pub logs: LogsConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    // diagnostics go to stderr, but the bot is interactive
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Contact bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Prompt printed before each line is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Banner printed when the session starts.
    #[serde(default = "default_welcome")]
    pub welcome: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            welcome: default_welcome(),
        }
    }
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

fn default_welcome() -> String {
    "Welcome to the assistant bot!".to_string()
}

/// Log analyzer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogsConfig {
    /// Level whose details are shown when none is given on the command line.
    #[serde(default)]
    pub default_level: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> AssistantResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AssistantResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            bot: BotConfig::default(),
            logs: LogsConfig::default(),
        }
    }
}
