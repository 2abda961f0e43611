//! Environment-driven configuration, collected once at startup.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use teloxide::types::ChatId;

/// Everything the process reads from the environment.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot API token. The process refuses to start without it.
    pub bot_token: String,
    /// Chat that receives completed orders. `None` disables forwarding.
    pub courier_chat: Option<ChatId>,
    /// User id seeded into the admin allow-list on startup.
    pub default_admin: Option<String>,
    /// Directory holding the JSON collections.
    pub data_dir: PathBuf,
    /// Port for the liveness endpoint.
    pub health_port: u16,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let bot_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;
        if bot_token.trim().is_empty() {
            bail!("TELEGRAM_BOT_TOKEN must not be empty");
        }

        let courier_chat = match env::var("COURIER_GROUP_ID") {
            Ok(raw) => Some(ChatId(raw.trim().parse::<i64>().with_context(|| {
                format!("COURIER_GROUP_ID is not a chat id: '{raw}'")
            })?)),
            Err(_) => None,
        };

        let default_admin = env::var("DEFAULT_ADMIN_ID")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let health_port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a port number: '{raw}'"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            bot_token,
            courier_chat,
            default_admin,
            data_dir,
            health_port,
        })
    }
}
