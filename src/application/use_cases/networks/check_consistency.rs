//! Check Consistency Use Case
//!
//! Matches development network names against registry descriptor names.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::consistency::{ConsistencyReport, IN_PROCESS_NETWORK_NAMES};

/// Use case for auditing the hand-maintained development list
pub struct CheckConsistencyUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl CheckConsistencyUseCase {
    /// Create a new CheckConsistencyUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> ConsistencyReport {
        let networks = self.network_registry.find_all();
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for name in self.network_registry.development_chains() {
            let chain_ids: Vec<_> = networks
                .iter()
                .filter(|(_, descriptor)| descriptor.name() == name)
                .map(|(chain_id, _)| *chain_id)
                .collect();

            if chain_ids.is_empty() {
                if IN_PROCESS_NETWORK_NAMES.contains(&name.as_str()) {
                    tracing::debug!(name = %name, "In-process development network has no registry entry");
                } else {
                    tracing::warn!(name = %name, "Development network has no registry entry");
                }
                unmatched.push(name.clone());
            } else {
                matched.push((name.clone(), chain_ids));
            }
        }

        ConsistencyReport::new(matched, unmatched)
    }
}
