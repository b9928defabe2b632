//! # Adapter Registry
//!
//! Singly linked list of adapter addresses stored as a `current -> next`
//! mapping anchored at a sentinel key.
//!
//! ```text
//! empty:     SENTINEL -> SENTINEL
//! non-empty: SENTINEL -> a3 -> a2 -> a1 -> SENTINEL
//! ```
//!
//! A key that is absent from the mapping is not a node. That single lookup
//! gives O(1) duplicate detection; insertion happens right after the
//! sentinel, and removal needs the caller to name the predecessor because
//! there are no back-links.

use crate::domain::value_objects::Address;
use crate::errors::AggregatorError;
use std::collections::HashMap;

/// Head anchor and terminator of the adapter list (`0x00..01`).
pub const SENTINEL: Address = Address::from_low_u64(1);

/// Mapping-backed adapter list owned by a single contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterList {
    /// Address of the owning contract; never accepted as an adapter.
    contract: Address,
    /// `current -> next` links. `SENTINEL` maps to the head.
    next: HashMap<Address, Address>,
    /// Number of linked adapters.
    count: usize,
}

impl AdapterList {
    /// Creates an empty list for the contract at `contract`.
    #[must_use]
    pub fn new(contract: Address) -> Self {
        let mut next = HashMap::new();
        next.insert(SENTINEL, SENTINEL);
        Self {
            contract,
            next,
            count: 0,
        }
    }

    /// Address of the owning contract.
    #[must_use]
    pub fn contract(&self) -> Address {
        self.contract
    }

    /// Number of linked adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no adapter is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if `address` is a linked adapter.
    #[must_use]
    pub fn contains(&self, address: Address) -> bool {
        address != SENTINEL && self.next.contains_key(&address)
    }

    /// The node following `address`, or zero if `address` is not a node.
    #[must_use]
    pub fn next_of(&self, address: Address) -> Address {
        self.next.get(&address).copied().unwrap_or(Address::ZERO)
    }

    /// Rejects zero, the sentinel and the owning contract.
    pub fn ensure_valid(&self, adapter: Address) -> Result<(), AggregatorError> {
        if adapter.is_zero() || adapter == SENTINEL || adapter == self.contract {
            return Err(AggregatorError::InvalidAddress(adapter));
        }
        Ok(())
    }

    /// Checks that `adapter` could be inserted right now.
    pub fn ensure_insertable(&self, adapter: Address) -> Result<(), AggregatorError> {
        self.ensure_valid(adapter)?;
        if self.next.contains_key(&adapter) {
            return Err(AggregatorError::DuplicateAdapter(adapter));
        }
        Ok(())
    }

    /// Links `adapter` as the new head.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` or `DuplicateAdapter`; the list is untouched on error.
    pub fn insert_head(&mut self, adapter: Address) -> Result<(), AggregatorError> {
        self.ensure_insertable(adapter)?;
        let head = self.next_of(SENTINEL);
        self.next.insert(adapter, head);
        self.next.insert(SENTINEL, adapter);
        self.count += 1;
        Ok(())
    }

    /// Unlinks `adapter`, given the node that currently points at it.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` if `adapter` is zero or the sentinel, and
    /// `WrongPredecessor` if `prev` does not point at `adapter`. The list is
    /// untouched on error.
    pub fn remove(&mut self, prev: Address, adapter: Address) -> Result<(), AggregatorError> {
        if adapter.is_zero() || adapter == SENTINEL {
            return Err(AggregatorError::InvalidAddress(adapter));
        }
        if self.next_of(prev) != adapter {
            return Err(AggregatorError::WrongPredecessor { prev, adapter });
        }
        let after = self.next_of(adapter);
        self.next.insert(prev, after);
        self.next.remove(&adapter);
        self.count -= 1;
        Ok(())
    }

    /// The node preceding `adapter`, found by walking the list.
    ///
    /// This is the off-critical-path lookup callers do before `remove`.
    #[must_use]
    pub fn predecessor_of(&self, adapter: Address) -> Option<Address> {
        if !self.contains(adapter) {
            return None;
        }
        std::iter::once(SENTINEL)
            .chain(self.iter())
            .find(|node| self.next_of(*node) == adapter)
    }

    /// Walks the list head to tail.
    #[must_use]
    pub fn iter(&self) -> AdapterIter<'_> {
        AdapterIter {
            list: self,
            cursor: SENTINEL,
            remaining: self.count,
        }
    }

    /// Adapters head to tail (most recently added first).
    #[must_use]
    pub fn to_vec(&self) -> Vec<Address> {
        self.iter().collect()
    }

    /// Raw link entries, sentinel included. Used by the invariant checker.
    pub(crate) fn links(&self) -> impl Iterator<Item = (Address, Address)> + '_ {
        self.next.iter().map(|(k, v)| (*k, *v))
    }
}

/// Head-to-tail iterator, bounded by the cached count.
#[derive(Debug)]
pub struct AdapterIter<'a> {
    list: &'a AdapterList,
    cursor: Address,
    remaining: usize,
}

impl Iterator for AdapterIter<'_> {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let next = self.list.next_of(self.cursor);
        if next == SENTINEL || next.is_zero() {
            self.remaining = 0;
            return None;
        }
        self.cursor = next;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

// =============================================================================
// TESTS
// =============================================================================
