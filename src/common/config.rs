use std::env;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

fn default_ws_url() -> String {
    "wss://api.devnet.solana.com/".to_string()
}

/// Runtime configuration for the bot.
///
/// Loaded from a TOML file when BOT_CONFIG_PATH is set, otherwise from
/// environment variables (with .env support via dotenv in main):
///
/// telegram_bot_token = "123456:ABC..."
/// solana_ws_url      = "wss://api.devnet.solana.com/"
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub telegram_bot_token: String,
    /// Websocket endpoint used for /monitor account subscriptions.
    #[serde(default = "default_ws_url")]
    pub solana_ws_url: String,
}

impl BotConfig {
    /// Loads from BOT_CONFIG_PATH if set, falling back to the environment.
    pub fn load() -> Result<Self> {
        match env::var("BOT_CONFIG_PATH") {
            Ok(path) if !path.trim().is_empty() => Self::from_path(&path),
            _ => Self::from_env(),
        }
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bot config {}", path))?;
        toml::from_str(&raw).with_context(|| format!("Invalid bot config {}", path))
    }

    pub fn from_env() -> Result<Self> {
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN environment variable is required"))?;

        let solana_ws_url = env::var("SOLANA_WS_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_ws_url);

        Ok(Self {
            telegram_bot_token,
            solana_ws_url,
        })
    }
}
