use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use orderbot::bot::{self, AppContext};
use orderbot::catalog::Catalog;
use orderbot::config::BotConfig;
use orderbot::dialogue::OrderState;
use orderbot::health;
use orderbot::storage::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting delivery order bot");

    let config = BotConfig::from_env()?;

    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("failed to open data directory {}", config.data_dir.display()))?;
    let catalog = Catalog::new(Arc::new(store));
    catalog
        .seed(config.default_admin.as_deref())
        .await
        .context("failed to seed collections")?;

    // Liveness endpoint for uptime monitors, independent of the bot loop.
    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(health_port).await {
            warn!(error = %e, "health endpoint stopped");
        }
    });

    let bot = Bot::new(&config.bot_token);
    let ctx = Arc::new(AppContext {
        catalog,
        courier_chat: config.courier_chat,
    });

    info!("Bot initialized, starting dispatcher");

    // The dispatcher's default per-chat distribution keeps updates for one
    // chat strictly in arrival order; chats interleave freely.
    let handler = dialogue::enter::<Update, InMemStorage<OrderState>, OrderState, _>()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<OrderState>::new(), ctx])
        .default_handler(|upd| async move {
            warn!(update = ?upd, "no handler found for update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "an error occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
