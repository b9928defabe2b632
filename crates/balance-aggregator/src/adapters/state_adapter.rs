//! # State Adapter
//!
//! In-memory contract host: token ledgers and deployed adapters.
//! Production hosts would read chain state through an RPC client instead.

use crate::domain::value_objects::{Address, U256};
use crate::errors::{AdapterError, CallError};
use crate::ports::outbound::{BalanceAdapter, ContractHost, TokenReader};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Ledger of one token contract.
#[derive(Debug, Default, Clone)]
struct TokenLedger {
    balances: HashMap<Address, U256>,
    total_supply: U256,
}

/// In-memory chain state.
#[derive(Default)]
pub struct InMemoryChain {
    /// Token contracts by address.
    tokens: RwLock<HashMap<Address, TokenLedger>>,
    /// Adapter contracts by address.
    adapters: RwLock<HashMap<Address, Arc<dyn BalanceAdapter>>>,
    /// Addresses whose every call reverts, with the reason.
    reverting: RwLock<HashMap<Address, String>>,
}

impl std::fmt::Debug for InMemoryChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryChain")
            .field("tokens", &self.tokens.read().len())
            .field("adapters", &self.adapters.read().len())
            .field("reverting", &self.reverting.read().len())
            .finish()
    }
}

impl InMemoryChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy an empty token at `token`.
    pub fn register_token(&self, token: Address) {
        self.tokens.write().entry(token).or_default();
    }

    /// Set `holder`'s balance of `token`, deploying the token if needed.
    pub fn set_balance(&self, token: Address, holder: Address, balance: U256) {
        self.tokens
            .write()
            .entry(token)
            .or_default()
            .balances
            .insert(holder, balance);
    }

    /// Set `token`'s total supply, deploying the token if needed.
    pub fn set_total_supply(&self, token: Address, supply: U256) {
        self.tokens.write().entry(token).or_default().total_supply = supply;
    }

    /// Deploy `adapter` at `address`, replacing whatever adapter was there.
    pub fn deploy_adapter(&self, address: Address, adapter: Arc<dyn BalanceAdapter>) {
        self.adapters.write().insert(address, adapter);
    }

    /// Make every call to `address` revert with `reason`.
    pub fn revert(&self, address: Address, reason: impl Into<String>) {
        self.reverting.write().insert(address, reason.into());
    }

    /// Undo [`Self::revert`].
    pub fn restore(&self, address: Address) {
        self.reverting.write().remove(&address);
    }

    fn ensure_not_reverting(&self, target: Address) -> Result<(), CallError> {
        match self.reverting.read().get(&target) {
            Some(reason) => Err(CallError::Reverted {
                target,
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl TokenReader for InMemoryChain {
    fn balance_of(&self, token: Address, holder: Address) -> Result<U256, CallError> {
        self.ensure_not_reverting(token)?;
        self.tokens
            .read()
            .get(&token)
            .map(|ledger| ledger.balances.get(&holder).copied().unwrap_or_default())
            .ok_or(CallError::NoContract(token))
    }

    fn total_supply(&self, token: Address) -> Result<U256, CallError> {
        self.ensure_not_reverting(token)?;
        self.tokens
            .read()
            .get(&token)
            .map(|ledger| ledger.total_supply)
            .ok_or(CallError::NoContract(token))
    }
}

impl ContractHost for InMemoryChain {
    fn call_adapter(
        &self,
        adapter: Address,
        asset: Address,
        account: Address,
    ) -> Result<U256, AdapterError> {
        self.ensure_not_reverting(adapter)?;
        // Release the lock before running adapter code; it reads tokens.
        let deployed = self
            .adapters
            .read()
            .get(&adapter)
            .cloned()
            .ok_or(CallError::NoContract(adapter))?;
        deployed.get_balance(self, asset, account)
    }
}

// =============================================================================
// TESTS
// =============================================================================
