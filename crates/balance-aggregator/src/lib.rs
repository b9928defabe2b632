//! # Balance Aggregator
//!
//! An owner-managed registry of balance adapters. The aggregated balance of
//! an account is its base token balance plus whatever every registered
//! adapter reports for that same token.
//!
//! ## Adapter Registry
//!
//! Adapters live in a singly linked list stored as a `current -> next`
//! mapping anchored at the sentinel address `0x00..01`:
//!
//! ```text
//! SENTINEL -> a3 -> a2 -> a1 -> SENTINEL
//! ```
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `add_adapter` | O(1) | links at the head, duplicate check is one lookup |
//! | `remove_adapter` | O(1) | caller supplies the predecessor |
//! | `get_adapters` | O(n) | head to tail, newest first |
//! | `balance_of` | O(n) calls | one adapter call per entry |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | No zero/sentinel/self entry | `domain/registry.rs` - `ensure_valid()` |
//! | INVARIANT-2 | No duplicate adapter | `domain/registry.rs` - `ensure_insertable()` |
//! | INVARIANT-3 | Count matches chain | `domain/invariants.rs` - `check_list_invariants()` |
//! | INVARIANT-4 | Owner-only mutation | `domain/ownership.rs` - `ensure_owner()` |
//! | INVARIANT-5 | Checked summation | `domain/services.rs` - `checked_accumulate()` |
//!
//! ## Outbound Dependencies
//!
//! | Port | Purpose |
//! |------|---------|
//! | `TokenReader` | `balanceOf` / `totalSupply` of token contracts |
//! | `ContractHost` | Dispatch `getBalance` to the adapter deployed at an address |
//!
//! ## Trust Boundary
//!
//! Adapters execute arbitrary code during `balance_of`. They only receive a
//! read-only token view and the query borrows the contract immutably, so an
//! adapter cannot corrupt the list; it can still make every query fail
//! until the owner removes it.
//!
//! ## Usage Example
//!
//! ```ignore
//! use balance_aggregator::prelude::*;
//!
//! let chain = InMemoryChain::new();
//! chain.deploy_adapter(lp, Arc::new(LpBalanceAdapter::new(pair)));
//!
//! let mut aggregator = BalanceAggregator::deploy(
//!     Deployment::create(deployer, 0),
//!     token,
//!     &[lp],
//!     AggregatorConfig::default(),
//! )?;
//! let total = aggregator.balance_of(&chain, user)?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod contract;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{AggregatorConfig, Deployment};

    // Value objects
    pub use crate::domain::value_objects::{Address, AddressParseError, U256};

    // Registry
    pub use crate::domain::registry::{AdapterList, SENTINEL};

    // Domain services
    pub use crate::domain::services::{
        checked_accumulate, compute_contract_address, pro_rata_share,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_list_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::BalanceAggregatorApi;
    pub use crate::ports::outbound::{BalanceAdapter, ContractHost, TokenReader};

    // Events
    pub use crate::events::{AggregatorEvent, AggregatorRequest, AggregatorResponse};

    // Errors
    pub use crate::errors::{AdapterError, AggregatorError, ArithmeticError, CallError, ConfigError};

    // Adapters
    pub use crate::adapters::{InMemoryChain, LpBalanceAdapter};

    // Contract & service
    pub use crate::contract::{BalanceAggregator, HEAD};
    pub use crate::service::{AggregatorService, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
