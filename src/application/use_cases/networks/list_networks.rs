//! List Networks Use Case
//!
//! Retrieves all known networks, sorted by chain ID.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::{ChainId, NetworkDescriptor};

/// Use case for listing every known network
pub struct ListNetworksUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl ListNetworksUseCase {
    /// Create a new ListNetworksUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<(ChainId, NetworkDescriptor)> {
        let networks: Vec<_> = self
            .network_registry
            .find_all()
            .into_iter()
            .map(|(chain_id, descriptor)| (chain_id, descriptor.clone()))
            .collect();

        tracing::debug!(count = networks.len(), "Listed networks");
        networks
    }
}
