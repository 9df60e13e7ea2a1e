//! Consistency Report
//!
//! Cross-check between the development network names and the names carried by
//! registry descriptors. The two lists are maintained by hand, so this is a
//! report, not an enforced invariant.

use crate::domain::models::network::ChainId;

/// Development names that never need a chain ID descriptor.
///
/// The in-process simulated network is spun up per run and has no fixed entry.
pub const IN_PROCESS_NETWORK_NAMES: &[&str] = &["hardhat"];

/// Outcome of matching development names against registry descriptors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsistencyReport {
    matched: Vec<(String, Vec<ChainId>)>,
    unmatched: Vec<String>,
}

impl ConsistencyReport {
    #[must_use]
    pub fn new(matched: Vec<(String, Vec<ChainId>)>, unmatched: Vec<String>) -> Self {
        Self { matched, unmatched }
    }

    /// Development names with at least one registry entry, paired with the chain IDs carrying them
    #[must_use]
    pub fn matched(&self) -> &[(String, Vec<ChainId>)] {
        &self.matched
    }

    /// Development names with no registry entry, in development-list order
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Unmatched names other than the in-process simulated network
    pub fn unexpected_gaps(&self) -> impl Iterator<Item = &str> {
        self.unmatched
            .iter()
            .map(String::as_str)
            .filter(|name| !IN_PROCESS_NETWORK_NAMES.contains(name))
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.unexpected_gaps().next().is_none()
    }
}
