//! # Driving Ports (API - Inbound)
//!
//! The public call surface of the balance aggregator contract.
//!
//! Mutating calls take the caller explicitly; the owner gate runs before
//! any argument is looked at.

use crate::domain::value_objects::{Address, U256};
use crate::errors::AggregatorError;
use crate::ports::outbound::ContractHost;

/// Balance aggregator contract API.
pub trait BalanceAggregatorApi {
    /// Address of the contract itself.
    fn address(&self) -> Address;

    /// Token whose balance is aggregated.
    fn base_asset(&self) -> Address;

    /// Current owner (zero once renounced).
    fn owner(&self) -> Address;

    /// Links `adapter` at the head of the list. Owner only.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidAddress`, `DuplicateAdapter`, `RegistryFull`.
    fn add_adapter(&mut self, caller: Address, adapter: Address) -> Result<(), AggregatorError>;

    /// Unlinks `adapter`, which `prev_adapter` must point at. Owner only.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidAddress`, `WrongPredecessor`.
    fn remove_adapter(
        &mut self,
        caller: Address,
        prev_adapter: Address,
        adapter: Address,
    ) -> Result<(), AggregatorError>;

    /// Adapters head to tail (most recently added first).
    fn get_adapters(&self) -> Vec<Address>;

    /// Number of registered adapters.
    fn adapter_count(&self) -> usize;

    /// Base balance of `account` plus every adapter's reported balance.
    ///
    /// # Errors
    ///
    /// `Arithmetic` on overflow, `CallFailed` when any collaborator fails.
    fn balance_of(&self, host: &dyn ContractHost, account: Address) -> Result<U256, AggregatorError>;

    /// Hands ownership to `new_owner`. Owner only.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), AggregatorError>;

    /// Leaves the contract without an owner. Owner only.
    fn renounce_ownership(&mut self, caller: Address) -> Result<(), AggregatorError>;
}
