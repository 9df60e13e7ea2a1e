//! Driven Adapters
//!
//! Implementations of gateway traits and ambient infrastructure:
//! - Static network registry data
//! - Configuration

pub mod config;
pub mod network_registry;

pub use self::config::AppConfig;
pub use network_registry::StaticNetworkRegistry;
