//! Bot configuration, loaded from environment variables.

use std::env;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing telegram bot token")]
    MissingTelegramToken,
    #[error("missing deepseek api key")]
    MissingDeepseekKey,
    #[error("missing sqlite path")]
    MissingSqlitePath,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub deepseek_api_key: String,
    pub sqlite_path: String,
    pub debug_mode: bool,
    /// Optional Telegram Bot API base URL override. Requests go to this URL
    /// when set (points tests at a mock server).
    /// Environment: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl Config {
    /// Loads configuration from the environment. Empty values count as
    /// missing.
    pub fn load() -> Result<Self, ConfigError> {
        let telegram_token =
            required_var("TELEGRAM_BOT_TOKEN").ok_or(ConfigError::MissingTelegramToken)?;
        let deepseek_api_key =
            required_var("DEEPSEEK_API_KEY").ok_or(ConfigError::MissingDeepseekKey)?;
        let sqlite_path = required_var("SQLITE_PATH").ok_or(ConfigError::MissingSqlitePath)?;
        let debug_mode = env_bool("DEBUG_MODE", false);

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            telegram_token,
            deepseek_api_key,
            sqlite_path,
            debug_mode,
            telegram_api_url,
        })
    }
}

fn required_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Reads a boolean variable; `true`/`false`/`1`/`0` case-insensitively,
/// anything else keeps the default.
fn env_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => match value.to_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
