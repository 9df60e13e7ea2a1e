//! Network Domain Model
//!
//! Represents a known blockchain network in the registry.

use serde::{Deserialize, Serialize};

use crate::shared::errors::DomainError;

/// Newtype wrapper for a protocol-assigned chain ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Create a ChainId from its raw integer value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ChainId> for u64 {
    fn from(chain_id: ChainId) -> Self {
        chain_id.0
    }
}

impl TryFrom<&str> for ChainId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidChainId(format!("'{value}': {e}")))
    }
}

impl TryFrom<String> for ChainId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Descriptor of a single known network
///
/// Only carries a display name. Names are not guaranteed to be unique across
/// descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    name: String,
}

impl NetworkDescriptor {
    /// Create a new descriptor with the given display name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
