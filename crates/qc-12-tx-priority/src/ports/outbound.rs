//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::TxEntrySummary;

/// Pending transaction pool, as seen by the priority index.
///
/// The pool owns entry storage and ancestor aggregation. Implementations must
/// return every tracked entry as of a single point in time, with unique
/// hashes.
pub trait PoolSnapshotProvider: Send + Sync {
    /// All currently tracked entries.
    fn snapshot(&self) -> Vec<TxEntrySummary>;
}

impl<P: PoolSnapshotProvider + ?Sized> PoolSnapshotProvider for std::sync::Arc<P> {
    fn snapshot(&self) -> Vec<TxEntrySummary> {
        (**self).snapshot()
    }
}
