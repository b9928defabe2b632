//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for the adapter registry.
//! NO I/O, NO external calls.
//!
//! - Dependencies point INWARD only (adapters depend on this, not vice versa).

pub mod entities;
pub mod invariants;
pub mod ownership;
pub mod registry;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use ownership::*;
pub use registry::*;
pub use services::*;
pub use value_objects::*;
