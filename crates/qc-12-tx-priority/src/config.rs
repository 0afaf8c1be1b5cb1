//! Configuration for Transaction Priority Subsystem

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`MiningConfig::strategy`].
pub const STRATEGY_ENV_VAR: &str = "QC_MINING_STRATEGY";

/// Mining section of the node configuration (`mining.strategy`).
///
/// An unset strategy is treated like any unrecognized name: resolution logs
/// an error and uses the fee-rate metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Ordering strategy name: `ancestorfee` or `ancestorfeerate`.
    /// Anything else falls back to `ancestorfeerate` when resolved.
    pub strategy: String,
}

impl MiningConfig {
    /// Create configuration from environment variables.
    ///
    /// - `QC_MINING_STRATEGY`: ordering strategy (default: unset)
    ///
    /// The value is taken verbatim. Validation happens at resolution time so
    /// that a bad value is reported once, in the log.
    pub fn from_env() -> Self {
        Self {
            strategy: env::var(STRATEGY_ENV_VAR).unwrap_or_default(),
        }
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }
}
