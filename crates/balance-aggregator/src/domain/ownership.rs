//! # Ownership
//!
//! Single-owner access control. Every mutating contract call checks the
//! caller against the stored owner before doing anything else.

use crate::domain::value_objects::Address;
use crate::errors::AggregatorError;

/// Stored owner of a contract. Zero means ownership was renounced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ownable {
    owner: Address,
}

impl Ownable {
    /// Makes `owner` the initial owner.
    #[must_use]
    pub const fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns true once ownership has been renounced.
    #[must_use]
    pub fn is_renounced(&self) -> bool {
        self.owner.is_zero()
    }

    /// Fails unless `caller` is the current owner.
    pub fn ensure_owner(&self, caller: Address) -> Result<(), AggregatorError> {
        // A zero caller never matches, even after renouncement.
        if caller != self.owner || caller.is_zero() {
            return Err(AggregatorError::Unauthorized { caller });
        }
        Ok(())
    }

    /// Hands ownership to `new_owner`, returning the previous owner.
    pub fn transfer(&mut self, caller: Address, new_owner: Address) -> Result<Address, AggregatorError> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(AggregatorError::InvalidOwner);
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Gives up ownership for good, returning the previous owner.
    pub fn renounce(&mut self, caller: Address) -> Result<Address, AggregatorError> {
        self.ensure_owner(caller)?;
        Ok(std::mem::replace(&mut self.owner, Address::ZERO))
    }
}
