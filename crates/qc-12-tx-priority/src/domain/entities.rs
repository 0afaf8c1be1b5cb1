//! Core entities for Transaction Priority

use super::value_objects::{Amount, FeeRate, Hash, Metric};
use serde::{Deserialize, Serialize};

/// Read-only summary of a pending pool entry.
///
/// The `*_with_ancestors` fields sum the entry with every unconfirmed
/// ancestor it depends on. The pool computes them; this crate never
/// modifies an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxEntrySummary {
    /// Transaction hash (unique within a snapshot)
    pub hash: Hash,
    /// Fee paid by this transaction alone
    pub fee: Amount,
    /// Serialized size of this transaction alone
    pub size: u64,
    /// Fee of this transaction plus all unconfirmed ancestors
    pub fee_with_ancestors: Amount,
    /// Size of this transaction plus all unconfirmed ancestors
    pub size_with_ancestors: u64,
}

impl TxEntrySummary {
    /// Creates a summary for a transaction with no unconfirmed ancestors.
    pub fn new(hash: Hash, fee: Amount, size: u64) -> Self {
        Self {
            hash,
            fee,
            size,
            fee_with_ancestors: fee,
            size_with_ancestors: size,
        }
    }

    /// Sets the ancestor-package totals.
    pub fn with_ancestors(mut self, fee_with_ancestors: Amount, size_with_ancestors: u64) -> Self {
        self.fee_with_ancestors = fee_with_ancestors;
        self.size_with_ancestors = size_with_ancestors;
        self
    }

    /// Fee rate of the ancestor package.
    pub fn ancestor_fee_rate(&self) -> FeeRate {
        FeeRate::from_fee_and_size(self.fee_with_ancestors, self.size_with_ancestors)
    }

    /// Fee rate of this transaction alone.
    pub fn fee_rate(&self) -> FeeRate {
        FeeRate::from_fee_and_size(self.fee, self.size)
    }

    /// Value of `metric` for this entry, in that metric's unit.
    pub fn metric_value(&self, metric: Metric) -> Amount {
        match metric {
            Metric::AggregateFee => self.fee_with_ancestors,
            Metric::AggregateFeeRate => self.ancestor_fee_rate().satoshis_per_k(),
        }
    }
}
