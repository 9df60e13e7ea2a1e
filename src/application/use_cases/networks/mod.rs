//! Network Use Cases
//!
//! Read-only queries against the network registry.

mod check_consistency;
mod find_networks_by_name;
mod get_network_by_chain_id;
mod is_development_chain;
mod list_networks;

pub use check_consistency::CheckConsistencyUseCase;
pub use find_networks_by_name::FindNetworksByNameUseCase;
pub use get_network_by_chain_id::GetNetworkByChainIdUseCase;
pub use is_development_chain::IsDevelopmentChainUseCase;
pub use list_networks::ListNetworksUseCase;
