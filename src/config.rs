use serde::{Deserialize, Serialize};

use crate::output::OutputLayout;

pub const DEFAULT_CONFIG_PATH: &str = "config/default";
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u32,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub layout: OutputLayout,
}

fn default_max_file_size_mb() -> u32 {
    20
}

impl Config {
    /// Load `.env`, the optional config file, `PUSHCONV__*` overrides and
    /// finally `TELEGRAM_BOT_TOKEN`.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(false))
            .add_source(
                config::Environment::with_prefix("PUSHCONV")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                config.telegram.bot_token = token;
            }
        }

        Ok(config)
    }

    pub fn bot_token(&self) -> anyhow::Result<&str> {
        let token = self.telegram.bot_token.trim();
        if token.is_empty() {
            anyhow::bail!(
                "Telegram bot token missing: set {} or telegram.bot_token in the config file",
                TOKEN_ENV
            );
        }
        Ok(token)
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.telegram.max_file_size_mb) * 1024 * 1024
    }

    /// Default configuration rendered as TOML, used by `init`.
    pub fn default_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&Config::default())?)
    }
}
