//! Command-router integration tests, driven through `route` exactly as the
//! Telegram layer drives it: raw text in, one reply out.

use std::collections::BTreeMap;

use chrono::DateTime;
use serde::Deserialize;
use saros_lp_bot::router::{route, Reply, POOLS_TEXT};
use saros_lp_bot::session::WalletRegistry;

const POOL: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

fn text_reply(registry: &WalletRegistry, chat_id: i64, input: &str) -> String {
    match route(registry, chat_id, input) {
        Some(Reply::Text(text)) => text,
        other => panic!("expected text reply for {:?}, got {:?}", input, other),
    }
}

#[test]
fn arity_check_precedes_wallet_check() {
    let registry = WalletRegistry::new();

    // One argument where three are required: the usage string comes back
    // even though no wallet is connected for this chat.
    let reply = text_reply(&registry, 7, "/addliquidity poolOnly");
    assert_eq!(reply, "Usage: /addliquidity <pool_address> <amount_x> <amount_y>");
}

#[test]
fn gated_command_requires_connected_wallet() {
    let registry = WalletRegistry::new();

    let reply = text_reply(&registry, 7, &format!("/addliquidity {} 100 200", POOL));
    assert_eq!(reply, "No wallet connected. Use /connectwallet first.");
}

#[test]
fn connectwallet_rejects_malformed_pubkey() {
    let registry = WalletRegistry::new();

    let reply = text_reply(&registry, 7, "/connectwallet not-a-key");
    assert!(reply.contains("Invalid pubkey"));
    assert!(!registry.is_connected(7));
}

#[test]
fn pools_is_static_and_needs_no_wallet() {
    let registry = WalletRegistry::new();

    assert_eq!(text_reply(&registry, 7, "/pools"), POOLS_TEXT);
}

#[test]
fn start_and_help_list_the_command_surface() {
    let registry = WalletRegistry::new();

    let start = text_reply(&registry, 7, "/start");
    for cmd in [
        "/connectwallet",
        "/pools",
        "/createposition",
        "/addliquidity",
        "/removeliquidity",
        "/monitor",
        "/unmonitor",
        "/help",
    ] {
        assert!(start.contains(cmd), "missing {} in /start text", cmd);
    }

    let help = text_reply(&registry, 7, "/help");
    assert!(help.contains("mocked"));
}

#[derive(Debug, Deserialize)]
struct DecodedIntent {
    command: String,
    pool: String,
    params: BTreeMap<String, String>,
    timestamp: String,
}

fn decode_deep_link(reply: &str) -> DecodedIntent {
    let link = reply
        .lines()
        .find(|line| line.starts_with("solana://transaction?data="))
        .expect("reply should contain a deep link");
    assert!(link.ends_with("&mock=true"), "link must be marked as a mock");

    let encoded = link
        .trim_start_matches("solana://transaction?data=")
        .trim_end_matches("&mock=true");
    serde_json::from_slice(&base64::decode(encoded).expect("payload should be base64"))
        .expect("payload should decode to an intent record")
}

#[test]
fn connect_then_addliquidity_end_to_end() {
    let registry = WalletRegistry::new();

    let connected = text_reply(&registry, 42, &format!("/connectwallet {}", POOL));
    assert!(connected.contains(POOL));

    let reply = text_reply(&registry, 42, &format!("/addliquidity {} 100 200", POOL));
    assert!(reply.contains("Mock transaction"));

    let intent = decode_deep_link(&reply);
    assert_eq!(intent.command, "addliquidity");
    assert_eq!(intent.pool, POOL);
    assert_eq!(intent.params.get("amountX").map(String::as_str), Some("100"));
    assert_eq!(intent.params.get("amountY").map(String::as_str), Some("200"));
    DateTime::parse_from_rfc3339(&intent.timestamp).expect("timestamp should be RFC 3339");
}

#[test]
fn createposition_and_removeliquidity_build_mock_intents() {
    let registry = WalletRegistry::new();
    registry.connect(42, POOL).expect("connect");

    let create = text_reply(
        &registry,
        42,
        &format!("/createposition {} 10.5 12.5 1000", POOL),
    );
    let intent = decode_deep_link(&create);
    assert_eq!(intent.command, "createposition");
    assert_eq!(intent.params.get("lowerPrice").map(String::as_str), Some("10.5"));
    assert_eq!(intent.params.get("upperPrice").map(String::as_str), Some("12.5"));
    assert_eq!(intent.params.get("liquidity").map(String::as_str), Some("1000"));

    let remove = text_reply(
        &registry,
        42,
        &format!("/removeliquidity {} pos-1 50", POOL),
    );
    let intent = decode_deep_link(&remove);
    assert_eq!(intent.command, "removeliquidity");
    assert_eq!(intent.params.get("positionId").map(String::as_str), Some("pos-1"));
    assert_eq!(intent.params.get("percentage").map(String::as_str), Some("50"));
}

#[test]
fn monitor_validates_address_and_requests_a_watch() {
    let registry = WalletRegistry::new();

    match route(&registry, 7, &format!("/monitor {}", POOL)) {
        Some(Reply::Monitor { pool, ack }) => {
            assert_eq!(pool.to_string(), POOL);
            assert_eq!(ack, format!("Monitoring {}.", POOL));
        }
        other => panic!("expected monitor reply, got {:?}", other),
    }

    let bad = text_reply(&registry, 7, "/monitor not-an-address");
    assert!(bad.contains("Invalid pool address"));
}

#[test]
fn unmonitor_requests_watch_removal() {
    let registry = WalletRegistry::new();

    match route(&registry, 7, &format!("/unmonitor {}", POOL)) {
        Some(Reply::Unmonitor { pool, ack }) => {
            assert_eq!(pool.to_string(), POOL);
            assert_eq!(ack, format!("Stopped monitoring {}.", POOL));
        }
        other => panic!("expected unmonitor reply, got {:?}", other),
    }
}
