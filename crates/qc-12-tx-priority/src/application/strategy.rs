//! Ordering strategy selection
//!
//! The metric is resolved from configuration exactly once. Later calls return
//! the frozen value even if the configuration has changed since, which keeps
//! every block template built by this process on the same ordering.

use crate::config::MiningConfig;
use crate::domain::value_objects::Metric;
use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, error};

static GLOBAL_SELECTOR: Lazy<StrategySelector> = Lazy::new(StrategySelector::new);

/// Maps a configured strategy name to a metric.
///
/// Unknown names (including the empty string) are logged and replaced by
/// [`Metric::DEFAULT`]. Never fails.
pub fn resolve_strategy(name: &str) -> Metric {
    match name.parse::<Metric>() {
        Ok(metric) => metric,
        Err(err) => {
            error!(
                strategy = name,
                fallback = %Metric::DEFAULT,
                "{}, so use default strategy <{}>",
                err,
                Metric::DEFAULT
            );
            Metric::DEFAULT
        }
    }
}

/// Resolve-once holder for the active ordering metric.
///
/// State machine:
/// ```text
/// [UNRESOLVED] ──resolve(config)──→ [RESOLVED(metric)]   (terminal)
/// ```
///
/// Concurrent first calls are safe: one configuration wins and every caller
/// sees the same metric.
#[derive(Debug, Default)]
pub struct StrategySelector {
    resolved: OnceCell<Metric>,
}

impl StrategySelector {
    pub fn new() -> Self {
        Self {
            resolved: OnceCell::new(),
        }
    }

    /// Process-wide selector for callers that cannot thread a metric through.
    ///
    /// Prefer resolving once at startup and passing the [`Metric`] down.
    pub fn global() -> &'static StrategySelector {
        &GLOBAL_SELECTOR
    }

    /// Returns the active metric, reading `config` only on the first call.
    pub fn resolve(&self, config: &MiningConfig) -> Metric {
        *self.resolved.get_or_init(|| {
            let metric = resolve_strategy(&config.strategy);
            debug!(metric = %metric, "Resolved block candidate ordering strategy");
            metric
        })
    }

    /// The metric, if already resolved.
    pub fn resolved(&self) -> Option<Metric> {
        self.resolved.get().copied()
    }
}
