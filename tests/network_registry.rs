//! Integration tests for the default network registry
//!
//! Exercises the exported data directly and through the use cases.

mod common;

use std::thread;

use chain_network_registry::{default_registry, ChainId, NetworkRegistry, DEVELOPMENT_CHAINS, NETWORK_CONFIG};

use common::{TestApp, KNOWN_CHAIN_IDS};

// ============================================================================
// Lookup by chain ID
// ============================================================================

#[test]
fn test_lookup_known_chain_ids() {
    let registry = default_registry();

    assert_eq!(registry.find_by_chain_id(ChainId::new(31337)).unwrap().name(), "localhost");
    assert_eq!(registry.find_by_chain_id(ChainId::new(5)).unwrap().name(), "goerli");
    assert_eq!(registry.find_by_chain_id(ChainId::new(137)).unwrap().name(), "mainnet");
}

#[test]
fn test_lookup_unknown_chain_ids_is_absent() {
    let registry = default_registry();

    for id in [0, 1, 4, 6, 136, 138, 1337, 31336, 31338, 80001, u64::MAX] {
        assert!(
            registry.find_by_chain_id(ChainId::new(id)).is_none(),
            "chain_id {id} should not be registered"
        );
    }
}

#[test]
fn test_exported_network_config_matches_registry() {
    assert_eq!(NETWORK_CONFIG.len(), KNOWN_CHAIN_IDS.len());
    for id in KNOWN_CHAIN_IDS {
        assert!(NETWORK_CONFIG.contains_key(&ChainId::new(id)));
    }
}

#[test]
fn test_get_network_use_case() {
    let app = TestApp::new();

    let network = app.get_network_by_chain_id.execute(ChainId::new(5)).unwrap();
    assert_eq!(network.name(), "goerli");
    assert!(app.get_network_by_chain_id.execute(ChainId::new(1)).is_none());
    assert!(app.get_network_by_chain_id.execute_required(ChainId::new(1)).is_err());
}

// ============================================================================
// Development chains
// ============================================================================

#[test]
fn test_is_development() {
    let registry = default_registry();

    assert!(registry.is_development("hardhat"));
    assert!(registry.is_development("localhost"));
    assert!(!registry.is_development("goerli"));
    assert!(!registry.is_development("mainnet"));
    assert!(!registry.is_development(""));
    assert!(!registry.is_development("Localhost"));
    assert!(!registry.is_development("HARDHAT"));
}

#[test]
fn test_development_chains_keep_declared_order() {
    assert_eq!(DEVELOPMENT_CHAINS, ["hardhat", "localhost"]);
    assert_eq!(default_registry().development_chains(), DEVELOPMENT_CHAINS);
}

#[test]
fn test_is_development_use_case() {
    let app = TestApp::new();

    assert!(app.is_development_chain.execute("localhost"));
    assert!(!app.is_development_chain.execute("mainnet"));
}

// ============================================================================
// Listing, reverse lookup and consistency
// ============================================================================

#[test]
fn test_list_networks_use_case() {
    let app = TestApp::new();

    let ids: Vec<u64> = app.list_networks.execute().iter().map(|(id, _)| id.value()).collect();
    assert_eq!(ids, KNOWN_CHAIN_IDS);
}

#[test]
fn test_find_networks_by_name_use_case() {
    let app = TestApp::new();

    assert_eq!(app.find_networks_by_name.execute("localhost"), vec![ChainId::new(31337)]);
    assert!(app.find_networks_by_name.execute("hardhat").is_empty());
}

#[test]
fn test_hardhat_has_no_registry_entry_and_is_consistent() {
    let report = TestApp::new().check_consistency.execute();

    assert_eq!(report.matched(), [("localhost".to_string(), vec![ChainId::new(31337)])]);
    assert_eq!(report.unmatched(), ["hardhat".to_string()]);
    assert!(report.is_consistent());
}

// ============================================================================
// Immutability and shared reads
// ============================================================================

#[test]
fn test_repeated_reads_return_identical_values() {
    let first = default_registry();
    let second = default_registry();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.find_all(), second.find_all());
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_concurrent_readers_see_same_data() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let registry = default_registry();
                (
                    registry.find_by_chain_id(ChainId::new(31337)).map(|d| d.name().to_string()),
                    registry.is_development("hardhat"),
                    registry.find_all().len(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (name, is_dev, count) = handle.join().unwrap();
        assert_eq!(name.as_deref(), Some("localhost"));
        assert!(is_dev);
        assert_eq!(count, 3);
    }
}
