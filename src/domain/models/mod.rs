//! Domain Models
//!
//! Pure domain entities and value objects representing known networks.

pub mod consistency;
pub mod network;

pub use consistency::ConsistencyReport;
pub use network::{ChainId, NetworkDescriptor};
