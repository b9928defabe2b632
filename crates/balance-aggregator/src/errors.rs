//! # Error Types
//!
//! All error types for registry mutation and balance aggregation.
//! Every error aborts the call that raised it; nothing is retried.

use crate::domain::value_objects::Address;
use thiserror::Error;

// =============================================================================
// AGGREGATOR ERRORS
// =============================================================================

/// Errors surfaced by the balance aggregator contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregatorError {
    /// Caller is not the current owner.
    #[error("Ownable: caller is not the owner")]
    Unauthorized {
        /// The rejected caller.
        caller: Address,
    },

    /// Ownership cannot be handed to the zero address.
    #[error("Ownable: new owner is the zero address")]
    InvalidOwner,

    /// Zero, sentinel or the aggregator's own address supplied as an adapter.
    #[error("invalid adapter address: {0:?}")]
    InvalidAddress(Address),

    /// Adapter is already linked into the list.
    #[error("adapter already registered: {0:?}")]
    DuplicateAdapter(Address),

    /// The supplied predecessor does not point at the adapter.
    #[error("invalid previous adapter: {prev:?} does not precede {adapter:?}")]
    WrongPredecessor {
        /// Claimed predecessor.
        prev: Address,
        /// Adapter being removed.
        adapter: Address,
    },

    /// The adapter list is at its configured capacity.
    #[error("adapter registry full: {count} >= {max}")]
    RegistryFull {
        /// Current number of adapters.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The deployment configuration was rejected.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// A token or adapter call failed.
    #[error("call failed: {0}")]
    CallFailed(#[from] CallError),
}

impl AggregatorError {
    /// Returns true if the error came from the ownership gate.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

// =============================================================================
// ARITHMETIC ERRORS
// =============================================================================

/// Fixed-width unsigned arithmetic failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Result does not fit in 256 bits.
    #[error("overflow")]
    Overflow,

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

// =============================================================================
// CALL ERRORS
// =============================================================================

/// Failures of calls into collaborator contracts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    /// No contract of the expected kind is deployed at the address.
    #[error("no contract at address: {0:?}")]
    NoContract(Address),

    /// The called contract reverted.
    #[error("call to {target:?} reverted: {reason}")]
    Reverted {
        /// The called contract.
        target: Address,
        /// Revert reason.
        reason: String,
    },
}

// =============================================================================
// ADAPTER ERRORS
// =============================================================================

/// Errors raised by a balance adapter while computing a balance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A token read made by the adapter failed.
    #[error("token call failed: {0}")]
    Call(#[from] CallError),

    /// The adapter's own computation failed.
    #[error("adapter arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl From<AdapterError> for AggregatorError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Call(call) => AggregatorError::CallFailed(call),
            AdapterError::Arithmetic(arith) => AggregatorError::Arithmetic(arith),
        }
    }
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The adapter cap must allow at least one adapter.
    #[error("max_adapters must be at least 1")]
    ZeroCapacity,

    /// Config document could not be parsed.
    #[error("invalid config: {0}")]
    Parse(String),
}

// =============================================================================
// TESTS
// =============================================================================
