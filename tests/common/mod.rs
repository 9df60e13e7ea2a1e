//! Common test utilities for integration tests
//!
//! Provides the wired-up use cases over the process-wide default registry.

#![allow(dead_code)]

use std::sync::Arc;

use chain_network_registry::application::use_cases::networks::{
    CheckConsistencyUseCase, FindNetworksByNameUseCase, GetNetworkByChainIdUseCase, IsDevelopmentChainUseCase,
    ListNetworksUseCase,
};
use chain_network_registry::{default_registry, NetworkRegistry};

/// Chain IDs present in the default registry
pub const KNOWN_CHAIN_IDS: [u64; 3] = [5, 137, 31337];

/// Use cases wired against the default registry
pub struct TestApp {
    pub get_network_by_chain_id: GetNetworkByChainIdUseCase,
    pub is_development_chain: IsDevelopmentChainUseCase,
    pub list_networks: ListNetworksUseCase,
    pub find_networks_by_name: FindNetworksByNameUseCase,
    pub check_consistency: CheckConsistencyUseCase,
}

impl TestApp {
    pub fn new() -> Self {
        let registry: Arc<dyn NetworkRegistry> = Arc::new(default_registry().clone());

        Self {
            get_network_by_chain_id: GetNetworkByChainIdUseCase::new(registry.clone()),
            is_development_chain: IsDevelopmentChainUseCase::new(registry.clone()),
            list_networks: ListNetworksUseCase::new(registry.clone()),
            find_networks_by_name: FindNetworksByNameUseCase::new(registry.clone()),
            check_consistency: CheckConsistencyUseCase::new(registry),
        }
    }
}
