//! Index Builder Service
//!
//! Main service implementing PriorityIndexApi.

use super::strategy::StrategySelector;
use crate::algorithms::{OrderedIndex, PriorityComparator};
use crate::config::MiningConfig;
use crate::domain::entities::TxEntrySummary;
use crate::domain::value_objects::Metric;
use crate::ports::inbound::PriorityIndexApi;
use crate::ports::outbound::PoolSnapshotProvider;

use tracing::debug;

/// Index Builder
///
/// Orchestrates one ordering pass:
/// 1. Pick the comparator for the resolved metric
/// 2. Take a snapshot from the pool
/// 3. Build the ordered index
///
/// The metric is fixed at construction. Build the service with a metric
/// resolved once at startup, or via [`IndexBuilder::from_config`].
pub struct IndexBuilder<P: PoolSnapshotProvider> {
    pool: P,
    comparator: PriorityComparator,
}

impl<P: PoolSnapshotProvider> IndexBuilder<P> {
    /// Create a builder ordering by `metric`
    pub fn new(pool: P, metric: Metric) -> Self {
        Self {
            pool,
            comparator: PriorityComparator::for_metric(metric),
        }
    }

    /// Create a builder whose metric comes from `selector`.
    ///
    /// `config` is only read if the selector has not resolved yet.
    pub fn from_config(pool: P, selector: &StrategySelector, config: &MiningConfig) -> Self {
        Self::new(pool, selector.resolve(config))
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Order an explicit snapshot with this builder's comparator.
    pub fn index_snapshot(&self, snapshot: Vec<TxEntrySummary>) -> OrderedIndex {
        let comparator = self.comparator;
        debug!(
            metric = %comparator.metric(),
            entries = snapshot.len(),
            "[qc-12] Building priority index"
        );

        #[cfg(debug_assertions)]
        let input = snapshot.clone();

        let index = OrderedIndex::build(snapshot, comparator);

        #[cfg(debug_assertions)]
        assert_invariants(&input, &index);

        debug!(
            indexed = index.len(),
            highest = ?index.highest().map(|e| e.hash),
            "[qc-12] Priority index built"
        );

        index
    }
}

#[cfg(debug_assertions)]
fn assert_invariants(input: &[TxEntrySummary], index: &OrderedIndex) {
    use crate::algorithms::EntryComparator;
    use crate::domain::invariants::{invariant_complete_coverage, invariant_total_order};

    let ordered: Vec<TxEntrySummary> = index.iter().cloned().collect();
    let comparator = index.comparator();
    debug_assert!(
        invariant_total_order(&ordered, |a, b| comparator.compare(a, b)),
        "priority index is not strictly ordered"
    );
    debug_assert!(
        invariant_complete_coverage(input, &ordered, |a, b| comparator.compare(a, b)),
        "priority index does not cover the snapshot"
    );
}

impl<P: PoolSnapshotProvider> PriorityIndexApi for IndexBuilder<P> {
    fn metric(&self) -> Metric {
        self.comparator.metric()
    }

    fn build_index(&self) -> OrderedIndex {
        let snapshot = self.pool.snapshot();
        self.index_snapshot(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::mocks::MockPool;
    use primitive_types::H256;
    use std::sync::Arc;
    use std::thread;

    fn make_hash(val: u8) -> H256 {
        H256::from_low_u64_be(val as u64)
    }

    fn entry(hash: u8, fee: i64, size: u64) -> TxEntrySummary {
        TxEntrySummary::new(make_hash(hash), fee, size)
    }

    fn example_pool() -> MockPool {
        MockPool::new(vec![
            entry(0x01, 10, 250),
            entry(0x02, 10, 250),
            entry(0x03, 30, 100),
        ])
    }

    fn hashes(index: &OrderedIndex) -> Vec<H256> {
        index.iter().map(|e| e.hash).collect()
    }

    #[test]
    fn test_build_by_fee() {
        let builder = IndexBuilder::new(example_pool(), Metric::AggregateFee);
        let index = builder.build_index();

        // B and A tie at 10, B has the larger hash
        assert_eq!(hashes(&index), vec![make_hash(2), make_hash(1), make_hash(3)]);
        assert_eq!(builder.metric(), Metric::AggregateFee);
    }

    #[test]
    fn test_build_by_fee_rate() {
        let builder = IndexBuilder::new(example_pool(), Metric::AggregateFeeRate);
        let index = builder.build_index();

        assert_eq!(hashes(&index), vec![make_hash(2), make_hash(1), make_hash(3)]);
        assert_eq!(builder.metric(), Metric::AggregateFeeRate);
    }

    #[test]
    fn test_metrics_disagree_on_package_order() {
        // big package pays more in total, small package pays more per byte
        let pool = MockPool::new(vec![entry(0x0a, 1_000, 10_000), entry(0x0b, 500, 1_000)]);
        let pool = Arc::new(pool);

        let by_fee = IndexBuilder::new(Arc::clone(&pool), Metric::AggregateFee).build_index();
        let by_rate = IndexBuilder::new(Arc::clone(&pool), Metric::AggregateFeeRate).build_index();

        assert_eq!(by_fee.highest().map(|e| e.hash), Some(make_hash(0x0a)));
        assert_eq!(by_rate.highest().map(|e| e.hash), Some(make_hash(0x0b)));
    }

    #[test]
    fn test_build_empty_pool() {
        let builder = IndexBuilder::new(MockPool::default(), Metric::AggregateFeeRate);
        let index = builder.build_index();

        assert!(index.is_empty());
    }

    #[test]
    fn test_repeated_hash_with_different_fees_is_kept_twice() {
        let pool = Arc::new(MockPool::new(vec![
            entry(0x07, 10, 250),
            entry(0x07, 20, 250),
        ]));

        for metric in [Metric::AggregateFee, Metric::AggregateFeeRate] {
            let index = IndexBuilder::new(Arc::clone(&pool), metric).build_index();

            let fees: Vec<i64> = index.iter().map(|e| e.fee_with_ancestors).collect();
            assert_eq!(fees, vec![10, 20]);
        }
    }

    #[test]
    fn test_fully_tied_repeat_is_indexed_once() {
        let builder = IndexBuilder::new(
            MockPool::new(vec![entry(0x07, 10, 250), entry(0x07, 10, 250)]),
            Metric::AggregateFee,
        );

        assert_eq!(builder.build_index().len(), 1);
    }

    #[test]
    fn test_each_build_takes_fresh_snapshot() {
        let builder = IndexBuilder::new(example_pool(), Metric::AggregateFee);

        let first = builder.build_index();
        let second = builder.build_index();

        assert_eq!(builder.pool().snapshot_calls(), 2);
        assert_eq!(hashes(&first), hashes(&second));
    }

    #[test]
    fn test_from_config_uses_selector() {
        let selector = StrategySelector::new();
        let config = MiningConfig::default().with_strategy("ancestorfee");

        let builder = IndexBuilder::from_config(example_pool(), &selector, &config);

        assert_eq!(builder.metric(), Metric::AggregateFee);
        assert_eq!(selector.resolved(), Some(Metric::AggregateFee));
    }

    #[test]
    fn test_from_config_after_resolution_ignores_new_config() {
        let selector = StrategySelector::new();
        selector.resolve(&MiningConfig::default().with_strategy("ancestorfee"));

        let changed = MiningConfig::default().with_strategy("ancestorfeerate");
        let builder = IndexBuilder::from_config(example_pool(), &selector, &changed);

        assert_eq!(builder.metric(), Metric::AggregateFee);
    }

    #[test]
    fn test_from_config_bad_strategy_uses_fee_rate() {
        let selector = StrategySelector::new();
        let config = MiningConfig::default().with_strategy("bogus");

        let builder = IndexBuilder::from_config(example_pool(), &selector, &config);

        assert_eq!(builder.metric(), Metric::AggregateFeeRate);
    }

    #[test]
    fn test_concurrent_readers_share_index() {
        let builder = IndexBuilder::new(example_pool(), Metric::AggregateFeeRate);
        let index = Arc::new(builder.build_index());
        let expected = hashes(&index);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = Arc::clone(&index);
                thread::spawn(move || index.iter().map(|e| e.hash).collect::<Vec<_>>())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
