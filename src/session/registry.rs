use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use solana_sdk::pubkey::Pubkey;

use super::SessionError;

/// In-memory registry binding a chat id to its connected wallet pubkey.
///
/// This is intentionally simple and synchronous. Each chat id is written
/// independently (last writer wins), so a single `Mutex` around the map is
/// all the coordination we need. If we ever need higher read concurrency,
/// we can swap the internal lock to an `RwLock` without changing the API.
pub struct WalletRegistry {
    inner: Mutex<HashMap<i64, Pubkey>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Validates `address` as a base58 32-byte pubkey and binds it to
    /// `chat_id`, overwriting any previous binding for that chat.
    ///
    /// On a malformed address this returns `Err(SessionError::InvalidAddress)`
    /// and leaves the registry untouched.
    pub fn connect(&self, chat_id: i64, address: &str) -> Result<Pubkey, SessionError> {
        let pubkey = Pubkey::from_str(address.trim())
            .map_err(|_| SessionError::InvalidAddress(address.to_string()))?;

        let mut guard = self.inner.lock().map_err(|e| {
            SessionError::Internal(format!("Mutex poisoned in connect: {}", e))
        })?;

        guard.insert(chat_id, pubkey);
        Ok(pubkey)
    }

    /// Returns the wallet bound to `chat_id`, or
    /// `Err(SessionError::NoWalletConnected)` if the chat never connected one.
    ///
    /// Callers branch on the result; this is the normal "is a wallet
    /// connected?" check for gated commands, not an exceptional path.
    pub fn get(&self, chat_id: i64) -> Result<Pubkey, SessionError> {
        let guard = self.inner.lock().map_err(|e| {
            SessionError::Internal(format!("Mutex poisoned in get: {}", e))
        })?;

        guard
            .get(&chat_id)
            .copied()
            .ok_or(SessionError::NoWalletConnected(chat_id))
    }

    /// Returns true if the chat currently has a wallet bound. If the internal
    /// mutex is poisoned, this returns `false` as a conservative default.
    pub fn is_connected(&self, chat_id: i64) -> bool {
        match self.inner.lock() {
            Ok(guard) => guard.contains_key(&chat_id),
            Err(_) => false,
        }
    }
}

impl Default for WalletRegistry {
    fn default() -> Self {
        Self::new()
    }
}
