//! Value objects for Transaction Priority
//!
//! Metric selection and fee-rate arithmetic shared by both comparators.

use super::errors::StrategyError;
use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction hash. Ordered as a 256-bit big-endian unsigned integer.
pub type Hash = H256;

/// Fee amount in satoshis. Signed because prioritisation deltas can push a
/// package below zero.
pub type Amount = i64;

/// Fee-rate precision: rates are expressed per kilobyte.
pub const BYTES_PER_KILOBYTE: i128 = 1_000;

/// Config name selecting [`Metric::AggregateFee`].
pub const ANCESTOR_FEE_STRATEGY: &str = "ancestorfee";

/// Config name selecting [`Metric::AggregateFeeRate`].
pub const ANCESTOR_FEE_RATE_STRATEGY: &str = "ancestorfeerate";

/// Metric driving the block-candidate ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Total fee of the transaction plus its unconfirmed ancestors.
    #[serde(rename = "ancestorfee")]
    AggregateFee,
    /// Ancestor-package fee divided by ancestor-package size.
    #[serde(rename = "ancestorfeerate")]
    AggregateFeeRate,
}

impl Metric {
    /// Metric used when the configured strategy is missing or unknown.
    pub const DEFAULT: Metric = Metric::AggregateFeeRate;

    /// Looks up a metric by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ANCESTOR_FEE_STRATEGY => Some(Metric::AggregateFee),
            ANCESTOR_FEE_RATE_STRATEGY => Some(Metric::AggregateFeeRate),
            _ => None,
        }
    }

    /// The configuration name of this metric.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::AggregateFee => ANCESTOR_FEE_STRATEGY,
            Metric::AggregateFeeRate => ANCESTOR_FEE_RATE_STRATEGY,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::from_name(s).ok_or_else(|| StrategyError::UnknownStrategy(s.to_string()))
    }
}

/// Fee rate in satoshis per kilobyte.
///
/// Computed as `fee * 1000 / size`, truncating toward zero. A package with
/// zero size has a zero rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeRate {
    satoshis_per_k: Amount,
}

impl FeeRate {
    /// Derives the per-kilobyte rate paid by `fee` over `size` bytes.
    pub fn from_fee_and_size(fee: Amount, size: u64) -> Self {
        if size == 0 {
            return Self::default();
        }
        // i128 keeps `fee * 1000` exact for every i64 fee
        let rate = i128::from(fee) * BYTES_PER_KILOBYTE / i128::from(size);
        let satoshis_per_k = rate.clamp(i128::from(Amount::MIN), i128::from(Amount::MAX)) as Amount;
        Self { satoshis_per_k }
    }

    /// Satoshis per kilobyte.
    pub fn satoshis_per_k(&self) -> Amount {
        self.satoshis_per_k
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sat/kB", self.satoshis_per_k)
    }
}
