//! In-memory pool snapshot adapter
//!
//! Implements `PoolSnapshotProvider` over a fixed set of entries, for tools
//! that load a captured pool dump and for tests.

use crate::domain::entities::TxEntrySummary;
use crate::ports::outbound::PoolSnapshotProvider;
use tracing::trace;

/// A frozen pool snapshot.
#[derive(Clone, Debug, Default)]
pub struct InMemorySnapshot {
    entries: Vec<TxEntrySummary>,
}

impl InMemorySnapshot {
    pub fn new(entries: Vec<TxEntrySummary>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<TxEntrySummary>> for InMemorySnapshot {
    fn from(entries: Vec<TxEntrySummary>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<TxEntrySummary> for InMemorySnapshot {
    fn from_iter<I: IntoIterator<Item = TxEntrySummary>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PoolSnapshotProvider for InMemorySnapshot {
    fn snapshot(&self) -> Vec<TxEntrySummary> {
        trace!("[qc-12] Serving {} entries from in-memory snapshot", self.entries.len());
        self.entries.clone()
    }
}
