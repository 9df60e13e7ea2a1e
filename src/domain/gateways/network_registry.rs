//! Network Registry Gateway
//!
//! Abstract trait defining the read-only contract for network lookups.

use crate::domain::models::network::{ChainId, NetworkDescriptor};

/// Read-only registry of known networks
///
/// There are no mutation operations. Implementations are fixed at construction
/// and may be shared freely across threads.
pub trait NetworkRegistry: Send + Sync {
    /// Find a network descriptor by its chain ID
    ///
    /// Unknown IDs yield `None`, never a default descriptor.
    fn find_by_chain_id(&self, chain_id: ChainId) -> Option<&NetworkDescriptor>;

    /// All known networks, sorted by chain ID ascending
    fn find_all(&self) -> Vec<(ChainId, &NetworkDescriptor)>;

    /// Names of networks treated as local development environments, in declared order
    fn development_chains(&self) -> &[String];

    /// Exact, case-sensitive membership test against the development names
    fn is_development(&self, name: &str) -> bool {
        self.development_chains().iter().any(|chain| chain == name)
    }
}
