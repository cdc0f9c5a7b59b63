use std::collections::HashMap;
use std::sync::Mutex;

use solana_sdk::pubkey::Pubkey;
use tokio::task::JoinHandle;
use tracing::warn;

/// In-memory registry of live watch tasks keyed by (chat, pool).
///
/// Keeping the handles here is what makes subscriptions bounded: a chat gets
/// at most one task per pool, /unmonitor can actually stop one, and shutdown
/// can stop them all instead of leaking websocket connections for the life
/// of the process.
pub struct MonitorRegistry {
    inner: Mutex<HashMap<(i64, Pubkey), JoinHandle<()>>>,
}

impl MonitorRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a watch task for (chat, pool). If one is already running for
    /// the same pair it is aborted and replaced, so re-sending /monitor never
    /// stacks duplicate subscriptions.
    pub fn insert(&self, chat_id: i64, pool: Pubkey, handle: JoinHandle<()>) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(err) => {
                warn!(%err, "monitor registry lock poisoned; aborting new watch");
                handle.abort();
                return;
            }
        };

        if let Some(previous) = guard.insert((chat_id, pool), handle) {
            previous.abort();
        }
    }

    /// Stops the watch for (chat, pool). Returns false if none was running.
    pub fn remove(&self, chat_id: i64, pool: Pubkey) -> bool {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(_) => return false,
        };

        match guard.remove(&(chat_id, pool)) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Number of currently registered watch tasks.
    pub fn active_count(&self) -> usize {
        match self.inner.lock() {
            Ok(guard) => guard.len(),
            Err(_) => 0,
        }
    }

    /// Aborts every registered watch task. Called once at process teardown.
    pub fn shutdown_all(&self) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };

        for (_, handle) in guard.drain() {
            handle.abort();
        }
    }
}

impl Default for MonitorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
