//! Domain Layer
//!
//! Contains the core domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::network_registry::NetworkRegistry;
pub use models::consistency::{ConsistencyReport, IN_PROCESS_NETWORK_NAMES};
pub use models::network::{ChainId, NetworkDescriptor};
