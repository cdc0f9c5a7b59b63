//! Mock transaction intents.
//!
//! Every liquidity command produces one of these instead of a real Solana
//! transaction: a small JSON record of what the user asked for, base64-encoded
//! into a placeholder `solana://` deep link. The payload is never persisted,
//! never replayed, and never broadcast.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Transient record of a mocked liquidity operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MockIntent {
    /// Command name without the leading slash, e.g. "addliquidity".
    pub command: String,
    /// Target pool address in base58 string form.
    pub pool: String,
    /// Positional arguments keyed by their parameter name.
    pub params: BTreeMap<String, String>,
    /// RFC 3339 timestamp of when the intent was built.
    pub timestamp: String,
}

impl MockIntent {
    pub fn new(command: &str, pool: &Pubkey, params: &[(&str, &str)]) -> Self {
        Self {
            command: command.to_string(),
            pool: pool.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Serializes the intent and wraps it in a placeholder deep link.
    ///
    /// The `mock=true` marker is load-bearing: nothing downstream may ever
    /// treat this as a signable transaction.
    pub fn deep_link(&self) -> String {
        let payload = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        format!(
            "solana://transaction?data={}&mock=true",
            base64::encode(payload)
        )
    }
}
