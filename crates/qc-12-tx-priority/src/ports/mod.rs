//! Ports module for Transaction Priority
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::PriorityIndexApi;
pub use outbound::PoolSnapshotProvider;
