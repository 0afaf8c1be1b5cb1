//! Inbound Ports (Driving Ports / API)

use crate::algorithms::OrderedIndex;
use crate::domain::value_objects::Metric;

/// Primary Transaction Priority API, consumed by block template assembly.
pub trait PriorityIndexApi: Send + Sync {
    /// The metric this builder orders by.
    fn metric(&self) -> Metric;

    /// Snapshot the pool and order it.
    ///
    /// Blocking: the whole index is materialized before returning. Callers
    /// that need responsiveness should run it on a worker thread.
    fn build_index(&self) -> OrderedIndex;
}
