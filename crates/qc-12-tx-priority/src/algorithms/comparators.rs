//! Ancestor-package comparators
//!
//! Both comparators order ascending by their metric and break ties by hash,
//! with the numerically LARGER hash sorting first. Downstream block
//! assemblers depend on this exact order, so the tie-break direction must not
//! be flipped.

use crate::domain::entities::TxEntrySummary;
use crate::domain::value_objects::Metric;
use std::cmp::Ordering;

/// Total order over pool entry summaries.
pub trait EntryComparator: Send + Sync {
    /// Compares `a` against `b`. `Equal` only for entries with the same
    /// metric value and the same hash.
    fn compare(&self, a: &TxEntrySummary, b: &TxEntrySummary) -> Ordering;

    /// True when `a` sorts strictly before `b`.
    fn less(&self, a: &TxEntrySummary, b: &TxEntrySummary) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Larger hash sorts as "less".
fn hash_tie_break(a: &TxEntrySummary, b: &TxEntrySummary) -> Ordering {
    b.hash.cmp(&a.hash)
}

/// Orders by `fee_with_ancestors`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AncestorFeeComparator;

impl EntryComparator for AncestorFeeComparator {
    fn compare(&self, a: &TxEntrySummary, b: &TxEntrySummary) -> Ordering {
        a.fee_with_ancestors
            .cmp(&b.fee_with_ancestors)
            .then_with(|| hash_tie_break(a, b))
    }
}

/// Orders by ancestor-package fee rate (sat/kB, truncated).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AncestorFeeRateComparator;

impl EntryComparator for AncestorFeeRateComparator {
    fn compare(&self, a: &TxEntrySummary, b: &TxEntrySummary) -> Ordering {
        a.ancestor_fee_rate()
            .cmp(&b.ancestor_fee_rate())
            .then_with(|| hash_tie_break(a, b))
    }
}

/// The comparator matching a resolved [`Metric`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityComparator {
    AncestorFee(AncestorFeeComparator),
    AncestorFeeRate(AncestorFeeRateComparator),
}

impl PriorityComparator {
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::AggregateFee => PriorityComparator::AncestorFee(AncestorFeeComparator),
            Metric::AggregateFeeRate => {
                PriorityComparator::AncestorFeeRate(AncestorFeeRateComparator)
            }
        }
    }

    pub fn metric(&self) -> Metric {
        match self {
            PriorityComparator::AncestorFee(_) => Metric::AggregateFee,
            PriorityComparator::AncestorFeeRate(_) => Metric::AggregateFeeRate,
        }
    }
}

impl From<Metric> for PriorityComparator {
    fn from(metric: Metric) -> Self {
        Self::for_metric(metric)
    }
}

impl EntryComparator for PriorityComparator {
    fn compare(&self, a: &TxEntrySummary, b: &TxEntrySummary) -> Ordering {
        match self {
            PriorityComparator::AncestorFee(cmp) => cmp.compare(a, b),
            PriorityComparator::AncestorFeeRate(cmp) => cmp.compare(a, b),
        }
    }
}
