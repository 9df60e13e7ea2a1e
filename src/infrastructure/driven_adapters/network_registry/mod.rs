//! Network Registry Implementations

mod static_registry;

pub use static_registry::{default_registry, StaticNetworkRegistry, DEVELOPMENT_CHAINS, NETWORK_CONFIG};
