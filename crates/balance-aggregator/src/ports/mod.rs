//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the balance aggregator.
//!
//! - **Driving Ports (Inbound)**: `BalanceAggregatorApi`
//! - **Driven Ports (Outbound)**: `TokenReader`, `BalanceAdapter`, `ContractHost`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
