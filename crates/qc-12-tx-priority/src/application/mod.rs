//! Application layer: strategy resolution and index building.

pub mod service;
pub mod strategy;

pub use service::IndexBuilder;
pub use strategy::{resolve_strategy, StrategySelector};
