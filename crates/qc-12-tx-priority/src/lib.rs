//! # QC-12: Transaction Priority Subsystem
//!
//! Orders pending pool entries for block template assembly by their
//! ancestor-package metrics.
//!
//! ## Strategies
//!
//! | Config name | Metric | Key |
//! |-------------|--------|-----|
//! | `ancestorfee` | `AggregateFee` | `fee_with_ancestors` |
//! | `ancestorfeerate` (default) | `AggregateFeeRate` | `fee_with_ancestors * 1000 / size_with_ancestors` |
//!
//! Ties on the metric are broken by hash: the numerically larger hash sorts
//! first in ascending order. Block assemblers reading the index back to
//! front therefore see, among equally priced packages, the smaller hash
//! first.
//!
//! ## Architecture
//!
//! - **Domain**: `TxEntrySummary`, `Metric`, `FeeRate`, invariants
//! - **Algorithms**: comparators and the ordered index
//! - **Ports**: Inbound (`PriorityIndexApi`) and Outbound (`PoolSnapshotProvider`)
//! - **Application**: `StrategySelector` (resolve-once) and `IndexBuilder`
//! - **Adapters**: `InMemorySnapshot`
//!
//! ## Usage
//!
//! ```rust
//! use qc_12_tx_priority::{
//!     IndexBuilder, InMemorySnapshot, MiningConfig, PriorityIndexApi, StrategySelector,
//!     TxEntrySummary,
//! };
//! use primitive_types::H256;
//!
//! let pool = InMemorySnapshot::new(vec![
//!     TxEntrySummary::new(H256::from_low_u64_be(1), 10, 250),
//!     TxEntrySummary::new(H256::from_low_u64_be(3), 30, 100),
//! ]);
//!
//! // Resolve once at startup, then pass the metric down.
//! let selector = StrategySelector::new();
//! let metric = selector.resolve(&MiningConfig::default().with_strategy("ancestorfeerate"));
//!
//! let index = IndexBuilder::new(pool, metric).build_index();
//! let best = index.iter_by_priority().next().map(|e| e.hash);
//! assert_eq!(best, Some(H256::from_low_u64_be(3)));
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::InMemorySnapshot;
pub use algorithms::{
    build_ordered_index, AncestorFeeComparator, AncestorFeeRateComparator, EntryComparator,
    OrderedIndex, PriorityComparator,
};
pub use application::{resolve_strategy, IndexBuilder, StrategySelector};
pub use config::MiningConfig;
pub use domain::entities::*;
pub use domain::errors::StrategyError;
pub use domain::value_objects::*;
pub use ports::inbound::PriorityIndexApi;
pub use ports::outbound::PoolSnapshotProvider;
