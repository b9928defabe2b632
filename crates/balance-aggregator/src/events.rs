//! # Event Schema
//!
//! Events emitted by the aggregator contract and the request/response
//! payloads accepted by [`crate::service::AggregatorService`].
//!
//! Caller identity is never part of a payload; it comes from the envelope
//! passed alongside the request.

use crate::domain::value_objects::{Address, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// CONTRACT EVENTS
// =============================================================================

/// Observable state change recorded by the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum AggregatorEvent {
    /// Owner changed. `previous_owner` is zero at deployment,
    /// `new_owner` is zero on renouncement.
    #[serde(rename_all = "camelCase")]
    OwnershipTransferred {
        /// Owner before the change.
        previous_owner: Address,
        /// Owner after the change.
        new_owner: Address,
    },
    /// Adapter linked at the head of the list.
    AdapterAdded {
        /// The new adapter.
        adapter: Address,
    },
    /// Adapter unlinked from the list.
    AdapterRemoved {
        /// The removed adapter.
        adapter: Address,
    },
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Call submitted to the aggregator service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum AggregatorRequest {
    /// `addAdapter(adapter)`.
    AddAdapter {
        /// Adapter to link.
        adapter: Address,
    },
    /// `removeAdapter(prevAdapter, adapter)`.
    #[serde(rename_all = "camelCase")]
    RemoveAdapter {
        /// Node currently pointing at `adapter`.
        prev_adapter: Address,
        /// Adapter to unlink.
        adapter: Address,
    },
    /// `transferOwnership(newOwner)`.
    #[serde(rename_all = "camelCase")]
    TransferOwnership {
        /// Next owner.
        new_owner: Address,
    },
    /// `renounceOwnership()`.
    RenounceOwnership,
    /// `getAdapters()`.
    GetAdapters,
    /// Number of registered adapters.
    AdapterCount,
    /// `balanceOf(account)`.
    BalanceOf {
        /// Account to aggregate.
        account: Address,
    },
    /// `owner()`.
    Owner,
    /// `token()`.
    BaseAsset,
}

impl AggregatorRequest {
    /// Returns true if the request mutates contract state.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::AddAdapter { .. }
                | Self::RemoveAdapter { .. }
                | Self::TransferOwnership { .. }
                | Self::RenounceOwnership
        )
    }

    /// Method name for logs.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::AddAdapter { .. } => "addAdapter",
            Self::RemoveAdapter { .. } => "removeAdapter",
            Self::TransferOwnership { .. } => "transferOwnership",
            Self::RenounceOwnership => "renounceOwnership",
            Self::GetAdapters => "getAdapters",
            Self::AdapterCount => "adapterCount",
            Self::BalanceOf { .. } => "balanceOf",
            Self::Owner => "owner",
            Self::BaseAsset => "token",
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Successful result of a service call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "value", rename_all = "camelCase")]
pub enum AggregatorResponse {
    /// Mutation applied.
    Done,
    /// Adapters head to tail.
    Adapters(Vec<Address>),
    /// Adapter count.
    Count(usize),
    /// Aggregated balance.
    Balance(U256),
    /// An address (owner or base asset).
    Address(Address),
}
