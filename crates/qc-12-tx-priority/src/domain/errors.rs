//! Error types for Transaction Priority
//!
//! Ordering itself cannot fail. The only error is a strategy name that maps
//! to no metric, and the selector recovers from it by falling back.

use thiserror::Error;

/// Strategy name resolution errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Configured strategy is not one of the known names
    #[error("the specified strategy <{0}> does not exist")]
    UnknownStrategy(String),
}
