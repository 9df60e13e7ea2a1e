//! Chain Network Registry
//!
//! A read-only lookup table mapping blockchain chain IDs to network descriptors,
//! plus the list of network names treated as local development environments.
//! Laid out following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use domain::{ChainId, NetworkDescriptor, NetworkRegistry};
pub use infrastructure::driven_adapters::network_registry::{
    default_registry, StaticNetworkRegistry, DEVELOPMENT_CHAINS, NETWORK_CONFIG,
};
