//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for integration with other subsystems.

mod snapshot;

pub use snapshot::InMemorySnapshot;
