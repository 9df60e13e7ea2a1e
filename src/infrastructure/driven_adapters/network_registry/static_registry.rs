//! Static Network Registry Implementation
//!
//! Implements the NetworkRegistry trait over hardcoded, immutable data.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::{ChainId, NetworkDescriptor};
use crate::shared::errors::RegistryError;

/// Known networks keyed by chain ID
pub static NETWORK_CONFIG: Lazy<HashMap<ChainId, NetworkDescriptor>> = Lazy::new(|| {
    HashMap::from([
        (ChainId::new(31337), NetworkDescriptor::new("localhost")),
        (ChainId::new(5), NetworkDescriptor::new("goerli")),
        (ChainId::new(137), NetworkDescriptor::new("mainnet")),
    ])
});

/// Network names treated as local development environments
pub const DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

static DEFAULT_REGISTRY: Lazy<StaticNetworkRegistry> = Lazy::new(|| {
    let registry = StaticNetworkRegistry {
        networks: NETWORK_CONFIG.clone(),
        development_chains: DEVELOPMENT_CHAINS.iter().map(ToString::to_string).collect(),
    };
    tracing::debug!(
        networks = registry.networks.len(),
        development_chains = registry.development_chains.len(),
        "Default network registry initialized"
    );
    registry
});

/// Process-wide registry over `NETWORK_CONFIG` and `DEVELOPMENT_CHAINS`
#[must_use]
pub fn default_registry() -> &'static StaticNetworkRegistry {
    &DEFAULT_REGISTRY
}

/// Serialized form of a registry, in the shape deployment scripts expect
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrySnapshot<'a> {
    network_config: BTreeMap<ChainId, &'a NetworkDescriptor>,
    development_chains: &'a [String],
}

/// Immutable in-memory implementation of NetworkRegistry
#[derive(Debug, Clone)]
pub struct StaticNetworkRegistry {
    networks: HashMap<ChainId, NetworkDescriptor>,
    development_chains: Vec<String>,
}

impl StaticNetworkRegistry {
    /// Build a fixed registry from explicit entries
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateChainId` if a chain ID appears twice.
    /// Returns `RegistryError::EmptyName` if a descriptor has an empty name.
    /// Returns `RegistryError::EmptyDevelopmentName` if a development name is empty.
    pub fn from_entries<N, D, S>(networks: N, development_chains: D) -> Result<Self, RegistryError>
    where
        N: IntoIterator<Item = (ChainId, NetworkDescriptor)>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (chain_id, descriptor) in networks {
            if descriptor.name().is_empty() {
                return Err(RegistryError::EmptyName(chain_id));
            }
            if map.insert(chain_id, descriptor).is_some() {
                return Err(RegistryError::DuplicateChainId(chain_id));
            }
        }

        let development_chains = development_chains
            .into_iter()
            .map(|name| {
                let name: String = name.into();
                if name.is_empty() {
                    Err(RegistryError::EmptyDevelopmentName)
                } else {
                    Ok(name)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            networks = map.len(),
            development_chains = development_chains.len(),
            "Network registry built"
        );

        Ok(Self {
            networks: map,
            development_chains,
        })
    }

    /// Export the registry as JSON keyed by chain ID in ascending order
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let snapshot = RegistrySnapshot {
            network_config: self.networks.iter().map(|(id, descriptor)| (*id, descriptor)).collect(),
            development_chains: &self.development_chains,
        };
        serde_json::to_string_pretty(&snapshot)
    }
}

impl NetworkRegistry for StaticNetworkRegistry {
    fn find_by_chain_id(&self, chain_id: ChainId) -> Option<&NetworkDescriptor> {
        self.networks.get(&chain_id)
    }

    fn find_all(&self) -> Vec<(ChainId, &NetworkDescriptor)> {
        let mut networks: Vec<_> = self.networks.iter().map(|(id, descriptor)| (*id, descriptor)).collect();
        networks.sort_by_key(|(id, _)| *id);
        networks
    }

    fn development_chains(&self) -> &[String] {
        &self.development_chains
    }
}
