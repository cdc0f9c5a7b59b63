use std::sync::Arc;

use anyhow::Result;
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saros_lp_bot::bot::{self, AppState};
use saros_lp_bot::common::BotConfig;
use saros_lp_bot::monitor::{MonitorRegistry, PoolWatcher};
use saros_lp_bot::session::WalletRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BotConfig::load()?;
    info!(ws_url = %config.solana_ws_url, "configuration loaded");

    let telegram = Bot::new(config.telegram_bot_token.clone());

    let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
    let state = Arc::new(AppState {
        wallets: WalletRegistry::new(),
        monitors: MonitorRegistry::new(),
        watcher: PoolWatcher::new(config.solana_ws_url.clone(), events_tx),
    });

    bot::run(telegram, state, events_rx).await
}
