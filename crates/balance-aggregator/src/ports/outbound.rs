//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the aggregator depends on:
//! - Token reads (`balanceOf`, `totalSupply`)
//! - Adapter calls (`getBalance`)
//!
//! All calls are synchronous views. An implementation that fails a call
//! fails the whole aggregated query.

use crate::domain::value_objects::{Address, U256};
use crate::errors::{AdapterError, CallError};

// =============================================================================
// TOKEN READER
// =============================================================================

/// Read-only access to fungible token contracts.
pub trait TokenReader: Send + Sync {
    /// `token.balanceOf(holder)`.
    ///
    /// # Errors
    ///
    /// `CallError` if no token is deployed at `token` or the call reverts.
    fn balance_of(&self, token: Address, holder: Address) -> Result<U256, CallError>;

    /// `token.totalSupply()`.
    fn total_supply(&self, token: Address) -> Result<U256, CallError>;
}

// =============================================================================
// BALANCE ADAPTER
// =============================================================================

/// An adapter reporting a user's indirect balance of an asset.
///
/// Implementations must be views: they receive only a [`TokenReader`] and
/// have no path back into the aggregator.
pub trait BalanceAdapter: Send + Sync {
    /// Balance of `asset` that `account` holds through this adapter's position.
    fn get_balance(
        &self,
        tokens: &dyn TokenReader,
        asset: Address,
        account: Address,
    ) -> Result<U256, AdapterError>;
}

// =============================================================================
// CONTRACT HOST
// =============================================================================

/// The environment the aggregator executes against.
///
/// Resolves adapter addresses to deployed adapters and runs their query.
pub trait ContractHost: TokenReader {
    /// `adapter.getBalance(asset, account)`.
    ///
    /// # Errors
    ///
    /// `AdapterError::Call` if nothing is deployed at `adapter` or it
    /// reverts; any error the adapter itself raises is passed through.
    fn call_adapter(
        &self,
        adapter: Address,
        asset: Address,
        account: Address,
    ) -> Result<U256, AdapterError>;
}
