//! Tests for the monitor-handle registry: bounded per (chat, pool),
//! replace-on-remonitor, explicit removal, and full teardown.

use std::str::FromStr;

use saros_lp_bot::monitor::MonitorRegistry;
use solana_sdk::pubkey::Pubkey;

fn pool_a() -> Pubkey {
    Pubkey::from_str("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin").unwrap()
}

fn pool_b() -> Pubkey {
    Pubkey::from_str("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap()
}

fn dummy_watch() -> tokio::task::JoinHandle<()> {
    tokio::spawn(std::future::pending::<()>())
}

#[tokio::test]
async fn remonitor_replaces_instead_of_stacking() {
    let registry = MonitorRegistry::new();

    registry.insert(1, pool_a(), dummy_watch());
    registry.insert(1, pool_a(), dummy_watch());

    // Same (chat, pool) pair: still exactly one live watch.
    assert_eq!(registry.active_count(), 1);

    registry.insert(1, pool_b(), dummy_watch());
    registry.insert(2, pool_a(), dummy_watch());
    assert_eq!(registry.active_count(), 3);
}

#[tokio::test]
async fn remove_stops_only_the_named_watch() {
    let registry = MonitorRegistry::new();

    registry.insert(1, pool_a(), dummy_watch());
    registry.insert(1, pool_b(), dummy_watch());

    assert!(registry.remove(1, pool_a()));
    assert_eq!(registry.active_count(), 1);

    // Removing something that was never registered reports false.
    assert!(!registry.remove(1, pool_a()));
    assert!(!registry.remove(9, pool_b()));
}

#[tokio::test]
async fn shutdown_clears_every_watch() {
    let registry = MonitorRegistry::new();

    registry.insert(1, pool_a(), dummy_watch());
    registry.insert(2, pool_a(), dummy_watch());
    registry.insert(3, pool_b(), dummy_watch());

    registry.shutdown_all();
    assert_eq!(registry.active_count(), 0);
}
