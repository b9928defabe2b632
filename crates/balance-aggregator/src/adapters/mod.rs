//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the outbound ports.
//!
//! - `LpBalanceAdapter`: the liquidity-pool share balance adapter
//! - `InMemoryChain`: token ledgers and deployed adapters held in memory

pub mod lp_balance;
pub mod state_adapter;

pub use lp_balance::*;
pub use state_adapter::*;
