//! Is Development Chain Use Case
//!
//! Checks whether a network name denotes a local development environment.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;

/// Use case for classifying a network name as development or not
pub struct IsDevelopmentChainUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl IsDevelopmentChainUseCase {
    /// Create a new IsDevelopmentChainUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    ///
    /// Exact, case-sensitive match. No normalization is applied to `name`.
    #[must_use]
    pub fn execute(&self, name: &str) -> bool {
        let is_development = self.network_registry.is_development(name);
        tracing::debug!(name, is_development, "Checked development chain");
        is_development
    }
}
