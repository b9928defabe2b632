//! # Domain Invariants
//!
//! Structural invariants of the adapter list. The contract re-checks them
//! in debug builds after every successful mutation; tests check them
//! after arbitrary operation sequences.
//!
//! - INVARIANT-1: No zero, sentinel or self entry
//! - INVARIANT-2: No duplicates, no cycle except through the sentinel
//! - INVARIANT-3: Cached count equals the reachable node count
//! - INVARIANT-4: Every mapping key is reachable (no orphaned nodes)
//! - INVARIANT-5: Count within the configured cap

use crate::domain::registry::{AdapterList, SENTINEL};
use crate::domain::value_objects::Address;
use std::collections::HashSet;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Check all list invariants at once.
#[must_use]
pub fn check_list_invariants(list: &AdapterList, max_adapters: usize) -> InvariantCheckResult {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    // Bounded by the mapping size, not the cached count.
    let mut cursor = list.next_of(SENTINEL);
    let mut terminated = false;
    let limit = list.links().count();
    for _ in 0..limit {
        if cursor == SENTINEL {
            terminated = true;
            break;
        }
        if cursor.is_zero() {
            violations.push(InvariantViolation::BrokenLink);
            break;
        }
        if cursor == list.contract() {
            violations.push(InvariantViolation::InvalidEntry(cursor));
        }
        if !seen.insert(cursor) {
            violations.push(InvariantViolation::Cycle(cursor));
            break;
        }
        cursor = list.next_of(cursor);
    }
    if !terminated && violations.is_empty() {
        violations.push(InvariantViolation::Unterminated);
    }

    if seen.len() != list.len() {
        violations.push(InvariantViolation::CountMismatch {
            cached: list.len(),
            reachable: seen.len(),
        });
    }

    for (key, next) in list.links() {
        if key == SENTINEL {
            continue;
        }
        if key.is_zero() || next.is_zero() {
            violations.push(InvariantViolation::InvalidEntry(key));
        } else if !seen.contains(&key) {
            violations.push(InvariantViolation::Orphan(key));
        }
    }

    if list.len() > max_adapters {
        violations.push(InvariantViolation::CapacityExceeded {
            count: list.len(),
            max: max_adapters,
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Zero, sentinel-pointing-to-zero or self entry in the list.
    InvalidEntry(Address),
    /// A link points at zero in the middle of the chain.
    BrokenLink,
    /// The walk revisited a node.
    Cycle(Address),
    /// The walk never came back to the sentinel.
    Unterminated,
    /// Cached count disagrees with the walk.
    CountMismatch {
        /// Count stored on the list.
        cached: usize,
        /// Nodes reached by walking from the sentinel.
        reachable: usize,
    },
    /// A node exists in the mapping but is not reachable.
    Orphan(Address),
    /// More adapters than the configured cap.
    CapacityExceeded {
        /// Current number of adapters.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntry(addr) => write!(f, "invalid list entry: {addr:?}"),
            Self::BrokenLink => write!(f, "list link points at zero"),
            Self::Cycle(addr) => write!(f, "cycle detected at {addr:?}"),
            Self::Unterminated => write!(f, "list not terminated by sentinel"),
            Self::CountMismatch { cached, reachable } => {
                write!(f, "count mismatch: cached {cached}, reachable {reachable}")
            }
            Self::Orphan(addr) => write!(f, "orphaned node: {addr:?}"),
            Self::CapacityExceeded { count, max } => {
                write!(f, "adapter cap exceeded: {count} > {max}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
