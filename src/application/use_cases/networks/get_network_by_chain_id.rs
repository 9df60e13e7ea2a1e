//! Get Network By Chain ID Use Case
//!
//! Retrieves a single network descriptor by its chain ID.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::{ChainId, NetworkDescriptor};
use crate::shared::errors::UseCaseError;

/// Use case for getting a network by chain ID
pub struct GetNetworkByChainIdUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl GetNetworkByChainIdUseCase {
    /// Create a new GetNetworkByChainIdUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    ///
    /// Unknown chain IDs are a normal outcome and yield `None`.
    #[must_use]
    pub fn execute(&self, chain_id: ChainId) -> Option<NetworkDescriptor> {
        tracing::debug!(chain_id = %chain_id, "Getting network by chain ID");

        let network = self.network_registry.find_by_chain_id(chain_id).cloned();

        match &network {
            Some(descriptor) => tracing::debug!(chain_id = %chain_id, name = descriptor.name(), "Network found"),
            None => tracing::debug!(chain_id = %chain_id, "Unknown chain ID"),
        }
        network
    }

    /// Execute the use case, treating an unknown chain ID as an error
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the chain ID is not registered.
    pub fn execute_required(&self, chain_id: ChainId) -> Result<NetworkDescriptor, UseCaseError> {
        self.execute(chain_id).ok_or_else(|| UseCaseError::NotFound {
            resource: "Network".to_string(),
            id: chain_id.to_string(),
        })
    }
}
