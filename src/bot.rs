//! Telegram transport: receives updates, hands text to the router, delivers
//! replies, and owns the monitor-task lifecycle.

use std::sync::Arc;

use anyhow::Result;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info, warn};

use crate::monitor::{MonitorEvent, MonitorRegistry, PoolWatcher};
use crate::router::{route, Reply};
use crate::session::WalletRegistry;

/// Shared per-process state, injected into every update handler.
pub struct AppState {
    pub wallets: WalletRegistry,
    pub monitors: MonitorRegistry,
    pub watcher: PoolWatcher,
}

/// Runs the bot with long-polling until ctrl-c, then tears down all
/// outstanding pool watches.
pub async fn run(
    bot: Bot,
    state: Arc<AppState>,
    events: UnboundedReceiver<MonitorEvent>,
) -> Result<()> {
    info!("Starting Saros LP bot...");

    let forwarder = tokio::spawn(forward_monitor_events(bot.clone(), events));

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state.clone()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    state.monitors.shutdown_all();
    forwarder.abort();

    info!("Saros LP bot stopped");
    Ok(())
}

/// Turns each monitor event into exactly one outgoing chat message.
async fn forward_monitor_events(bot: Bot, mut events: UnboundedReceiver<MonitorEvent>) {
    while let Some(event) = events.recv().await {
        let text = format!(
            "Update for {}: account data changed at slot {}. Check the explorer.",
            event.pool, event.slot
        );
        if let Err(err) = bot.send_message(ChatId(event.chat_id), text).await {
            warn!(chat_id = event.chat_id, %err, "failed to deliver monitor notice");
        }
    }
}

async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };

    info!(chat_id = chat_id.0, text, "received message");

    let reply = match route(&state.wallets, chat_id.0, text) {
        Some(reply) => reply,
        None => return Ok(()),
    };

    let response = match reply {
        Reply::Text(text) => text,
        Reply::Monitor { pool, ack } => {
            let handle = state.watcher.spawn_watch(chat_id.0, pool);
            state.monitors.insert(chat_id.0, pool, handle);
            ack
        }
        Reply::Unmonitor { pool, ack } => {
            if state.monitors.remove(chat_id.0, pool) {
                ack
            } else {
                format!("Not monitoring {}.", pool)
            }
        }
    };

    // A failed send must never take the dispatcher down; one broken chat
    // cannot be allowed to affect every other session.
    if let Err(err) = bot.send_message(chat_id, response).await {
        error!(chat_id = chat_id.0, %err, "failed to send reply");
    }

    Ok(())
}
