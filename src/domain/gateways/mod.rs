//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for network data sources.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod network_registry;

pub use network_registry::NetworkRegistry;
