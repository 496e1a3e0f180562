//! Runtime configuration
//!
//! Values come from the environment first and fall back to an optional TOML
//! file. The resolved [`RelayConfig`] is built once at startup and handed to
//! [`crate::AppState`].

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RelayError, Result};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_CONFIG_PATH: &str = "relay_config.toml";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct RelayConfig {
    pub telegram: TelegramConfig,
    pub webhook_secret: String,
    pub bind_address: String,
    pub log_dir: Option<PathBuf>,
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

// Secrets stay out of Debug output so a stray `{:?}` can't leak them.
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("telegram", &self.telegram)
            .field("webhook_secret", &"<redacted>")
            .field("bind_address", &self.bind_address)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Shape of the optional TOML config file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub telegram: FileTelegram,
    #[serde(default)]
    pub github: FileGithub,
    #[serde(default)]
    pub server: FileServer,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileTelegram {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileGithub {
    pub webhook_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileServer {
    pub bind_address: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Load and parse the config file. A missing file yields an empty config.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let config_str = fs::read_to_string(path).map_err(|e| {
        RelayError::ConfigError(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: FileConfig = toml::from_str(&config_str)?;
    Ok(config)
}

impl RelayConfig {
    /// Resolve configuration from the process environment and the file named
    /// by `RELAY_CONFIG`.
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("RELAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = load_config_file(Path::new(&config_path))?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file config with values from `lookup`, which wins on conflicts.
    pub fn resolve<F>(file: FileConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = var("TELEGRAM_BOT_TOKEN")
            .or(file.telegram.bot_token)
            .ok_or_else(|| missing("TELEGRAM_BOT_TOKEN"))?;
        let chat_id = var("TELEGRAM_CHAT_ID")
            .or(file.telegram.chat_id)
            .ok_or_else(|| missing("TELEGRAM_CHAT_ID"))?;
        let webhook_secret = var("GITHUB_WEBHOOK_SECRET")
            .or(file.github.webhook_secret)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| missing("GITHUB_WEBHOOK_SECRET"))?;

        let api_base = var("TELEGRAM_API_BASE")
            .or(file.telegram.api_base)
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string());
        let bind_address = var("BIND_ADDRESS")
            .or(file.server.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let log_dir = var("LOG_DIR").map(PathBuf::from).or(file.server.log_dir);

        Ok(Self {
            telegram: TelegramConfig {
                bot_token,
                chat_id,
                api_base: api_base.trim_end_matches('/').to_string(),
            },
            webhook_secret,
            bind_address,
            log_dir,
        })
    }
}

fn missing(key: &str) -> RelayError {
    RelayError::ConfigError(format!(
        "{} is not set (environment or config file)",
        key
    ))
}
