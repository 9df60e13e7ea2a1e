//! Use Cases
//!
//! Application-specific read operations.
//! Each use case is a single-purpose struct with an execute() method.

pub mod networks;

pub use networks::{
    CheckConsistencyUseCase, FindNetworksByNameUseCase, GetNetworkByChainIdUseCase, IsDevelopmentChainUseCase,
    ListNetworksUseCase,
};
