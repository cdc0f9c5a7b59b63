//! Pool account watching for /monitor.
//!
//! Each watch is one tokio task holding a websocket account subscription.
//! Tasks are tracked per (chat, pool) in `MonitorRegistry` so they can be
//! replaced on re-monitor, stopped by /unmonitor, and all torn down when the
//! process exits. Every account change becomes exactly one `MonitorEvent`;
//! the Telegram layer turns each event into one chat message, with no
//! deduplication or throttling.

pub mod registry;

pub use registry::MonitorRegistry;

use futures_util::StreamExt;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::pubsub_client::PubsubClient;
use solana_client::rpc_config::RpcAccountInfoConfig;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One observed change on a monitored pool account.
#[derive(Clone, Debug)]
pub struct MonitorEvent {
    pub chat_id: i64,
    pub pool: Pubkey,
    pub slot: u64,
}

/// Spawns account-watch tasks against a Solana websocket endpoint.
#[derive(Clone)]
pub struct PoolWatcher {
    ws_url: String,
    events: UnboundedSender<MonitorEvent>,
}

impl PoolWatcher {
    pub fn new(ws_url: String, events: UnboundedSender<MonitorEvent>) -> Self {
        Self { ws_url, events }
    }

    /// Spawns a watch task for one (chat, pool) pair. The caller owns the
    /// returned handle and is responsible for registering it so it can be
    /// aborted later.
    pub fn spawn_watch(&self, chat_id: i64, pool: Pubkey) -> JoinHandle<()> {
        let ws_url = self.ws_url.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            if let Err(err) = watch_account(&ws_url, chat_id, pool, events).await {
                warn!(chat_id, %pool, %err, "pool watch ended with error");
            }
        })
    }
}

async fn watch_account(
    ws_url: &str,
    chat_id: i64,
    pool: Pubkey,
    events: UnboundedSender<MonitorEvent>,
) -> anyhow::Result<()> {
    let client = PubsubClient::new(ws_url).await?;
    let config = RpcAccountInfoConfig {
        encoding: Some(UiAccountEncoding::Base64),
        data_slice: None,
        commitment: Some(CommitmentConfig::confirmed()),
        min_context_slot: None,
    };
    let (mut stream, _unsubscribe) = client.account_subscribe(&pool, Some(config)).await?;

    info!(chat_id, %pool, "account subscription established");

    while let Some(update) = stream.next().await {
        let event = MonitorEvent {
            chat_id,
            pool,
            slot: update.context.slot,
        };
        // Receiver gone means the bot is shutting down; stop watching.
        if events.send(event).is_err() {
            break;
        }
    }

    Ok(())
}
