//! # Core Domain Entities
//!
//! Configuration and deployment descriptors for the aggregator.

use crate::domain::services::compute_contract_address;
use crate::domain::value_objects::Address;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

// =============================================================================
// AGGREGATOR CONFIG
// =============================================================================

/// Aggregator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Upper bound on registered adapters (default: 64).
    ///
    /// `balance_of` makes one adapter call per entry, so this caps its cost.
    pub max_adapters: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_adapters: Self::DEFAULT_MAX_ADAPTERS,
        }
    }
}

impl AggregatorConfig {
    /// Default adapter cap.
    pub const DEFAULT_MAX_ADAPTERS: usize = 64;

    /// Parses a JSON config document; missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the aggregator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_adapters == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

// =============================================================================
// DEPLOYMENT
// =============================================================================

/// Who deploys the contract and where it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Deploying account; becomes the initial owner.
    pub deployer: Address,
    /// Address of the deployed contract.
    pub address: Address,
}

impl Deployment {
    /// Deployment at an explicit address.
    #[must_use]
    pub const fn at(deployer: Address, address: Address) -> Self {
        Self { deployer, address }
    }

    /// CREATE deployment from `deployer` at account nonce `nonce`.
    #[must_use]
    pub fn create(deployer: Address, nonce: u64) -> Self {
        Self {
            deployer,
            address: compute_contract_address(deployer, nonce),
        }
    }
}
