//! # Balance Aggregator Contract
//!
//! Holds the base asset, the owner and the adapter list, and answers
//! aggregated balance queries.
//!
//! Every mutation validates fully before touching state, so a rejected
//! call leaves the list, the count and the event log exactly as they were.
//! `balance_of` borrows the contract immutably; an adapter running during
//! the query cannot reach the registry for writing.

use crate::domain::entities::{AggregatorConfig, Deployment};
use crate::domain::invariants::check_list_invariants;
use crate::domain::ownership::Ownable;
use crate::domain::registry::{AdapterList, SENTINEL};
use crate::domain::services::checked_accumulate;
use crate::domain::value_objects::{Address, U256};
use crate::errors::AggregatorError;
use crate::events::AggregatorEvent;
use crate::ports::inbound::BalanceAggregatorApi;
use crate::ports::outbound::ContractHost;
use tracing::{debug, info};

/// Head anchor of every aggregator's adapter list; pass it as
/// `prev_adapter` to remove the current head.
pub const HEAD: Address = SENTINEL;

/// The aggregator contract state.
#[derive(Clone, Debug)]
pub struct BalanceAggregator {
    address: Address,
    base_asset: Address,
    ownable: Ownable,
    adapters: AdapterList,
    config: AggregatorConfig,
    events: Vec<AggregatorEvent>,
}

impl BalanceAggregator {
    /// Deploys the contract and links `initial_adapters` in order.
    ///
    /// Each adapter is checked against the list built so far, so a repeat
    /// anywhere in the input is rejected. Since insertion is head-first,
    /// `get_adapters` afterwards returns the input reversed.
    ///
    /// # Errors
    ///
    /// `Config` if the configuration fails validation, then
    /// `InvalidAddress`, `DuplicateAdapter` or `RegistryFull`. Nothing is
    /// deployed on error.
    pub fn deploy(
        deployment: Deployment,
        base_asset: Address,
        initial_adapters: &[Address],
        config: AggregatorConfig,
    ) -> Result<Self, AggregatorError> {
        config.validate()?;
        let mut contract = Self {
            address: deployment.address,
            base_asset,
            ownable: Ownable::new(deployment.deployer),
            adapters: AdapterList::new(deployment.address),
            config,
            events: vec![AggregatorEvent::OwnershipTransferred {
                previous_owner: Address::ZERO,
                new_owner: deployment.deployer,
            }],
        };
        for adapter in initial_adapters {
            contract.link(*adapter)?;
        }
        info!(
            address = ?contract.address,
            base_asset = ?base_asset,
            adapters = contract.adapters.len(),
            "Balance aggregator deployed"
        );
        Ok(contract)
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Returns true if `address` is a registered adapter.
    #[must_use]
    pub fn is_adapter(&self, address: Address) -> bool {
        self.adapters.contains(address)
    }

    /// The node to pass as `prev_adapter` when removing `adapter`.
    #[must_use]
    pub fn predecessor_of(&self, adapter: Address) -> Option<Address> {
        self.adapters.predecessor_of(adapter)
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AggregatorEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain_events(&mut self) -> Vec<AggregatorEvent> {
        std::mem::take(&mut self.events)
    }

    fn link(&mut self, adapter: Address) -> Result<(), AggregatorError> {
        self.adapters.ensure_insertable(adapter)?;
        if self.adapters.len() >= self.config.max_adapters {
            return Err(AggregatorError::RegistryFull {
                count: self.adapters.len(),
                max: self.config.max_adapters,
            });
        }
        self.adapters.insert_head(adapter)?;
        self.events.push(AggregatorEvent::AdapterAdded { adapter });
        self.debug_check_invariants();
        Ok(())
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            check_list_invariants(&self.adapters, self.config.max_adapters).is_valid(),
            "adapter list invariants violated"
        );
    }
}

impl BalanceAggregatorApi for BalanceAggregator {
    fn address(&self) -> Address {
        self.address
    }

    fn base_asset(&self) -> Address {
        self.base_asset
    }

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn add_adapter(&mut self, caller: Address, adapter: Address) -> Result<(), AggregatorError> {
        self.ownable.ensure_owner(caller)?;
        self.link(adapter)?;
        info!(adapter = ?adapter, count = self.adapters.len(), "Adapter added");
        Ok(())
    }

    fn remove_adapter(
        &mut self,
        caller: Address,
        prev_adapter: Address,
        adapter: Address,
    ) -> Result<(), AggregatorError> {
        self.ownable.ensure_owner(caller)?;
        self.adapters.remove(prev_adapter, adapter)?;
        self.events.push(AggregatorEvent::AdapterRemoved { adapter });
        self.debug_check_invariants();
        info!(adapter = ?adapter, count = self.adapters.len(), "Adapter removed");
        Ok(())
    }

    fn get_adapters(&self) -> Vec<Address> {
        self.adapters.to_vec()
    }

    fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    fn balance_of(&self, host: &dyn ContractHost, account: Address) -> Result<U256, AggregatorError> {
        let mut total = host.balance_of(self.base_asset, account)?;
        for adapter in self.adapters.iter() {
            let amount = host.call_adapter(adapter, self.base_asset, account)?;
            debug!(adapter = ?adapter, amount = %amount, "Adapter balance");
            total = checked_accumulate(total, amount)?;
        }
        Ok(total)
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), AggregatorError> {
        let previous_owner = self.ownable.transfer(caller, new_owner)?;
        self.events.push(AggregatorEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        info!(previous_owner = ?previous_owner, new_owner = ?new_owner, "Ownership transferred");
        Ok(())
    }

    fn renounce_ownership(&mut self, caller: Address) -> Result<(), AggregatorError> {
        let previous_owner = self.ownable.renounce(caller)?;
        self.events.push(AggregatorEvent::OwnershipTransferred {
            previous_owner,
            new_owner: Address::ZERO,
        });
        info!(previous_owner = ?previous_owner, "Ownership renounced");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
