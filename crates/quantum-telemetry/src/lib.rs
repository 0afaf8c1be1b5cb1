//! # Quantum Telemetry
//!
//! Structured logging for Quantum-Chain subsystems, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quantum_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::for_subsystem("12", "tx-priority");
//!     let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//!
//!     // Application code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `quantum-chain` | Service name in log records |
//! | `QC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `QC_SUBSYSTEM_ID` | `00` | Subsystem identifier |
//! | `QC_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `QC_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |
//! | `QC_NETWORK` | `testnet` | Network name |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, StructuredLogger};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
///
/// Returns a guard to hold for the lifetime of the application. Fails with
/// [`TelemetryError::SubscriberInit`] if a global subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let logger = init_logging(config)?;

    tracing::info!(
        service = %config.full_service_name(),
        network = %config.network,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard { _logger: logger })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _logger: StructuredLogger,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!("Shutting down telemetry");
    }
}
