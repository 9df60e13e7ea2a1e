//! Find Networks By Name Use Case
//!
//! Reverse lookup from a display name to the chain IDs carrying it.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::ChainId;

/// Use case for finding chain IDs by network name
pub struct FindNetworksByNameUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl FindNetworksByNameUseCase {
    /// Create a new FindNetworksByNameUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    ///
    /// Names are not unique, so every matching chain ID is returned in ascending order.
    #[must_use]
    pub fn execute(&self, name: &str) -> Vec<ChainId> {
        let chain_ids: Vec<_> = self
            .network_registry
            .find_all()
            .into_iter()
            .filter(|(_, descriptor)| descriptor.name() == name)
            .map(|(chain_id, _)| chain_id)
            .collect();

        tracing::debug!(name, count = chain_ids.len(), "Found networks by name");
        chain_ids
    }
}
