//! Structured logging.
//!
//! Installs a global `tracing` subscriber: an `EnvFilter` built from the
//! configured level plus a pretty (development) or JSON (containers) fmt
//! layer writing to stderr.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Structured logger handle
pub struct StructuredLogger {
    _initialized: bool,
}

/// Build the level filter for `config`.
pub(crate) fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| {
        TelemetryError::Config(format!("invalid log level '{}': {}", config.log_level, e))
    })
}

/// Initialize structured logging.
///
/// With `console_output` disabled only the filter is installed, which keeps
/// span and event plumbing active without writing anything.
pub fn init_logging(config: &TelemetryConfig) -> Result<StructuredLogger, TelemetryError> {
    let filter = env_filter(config)?;

    let fmt_layer = if !config.console_output {
        None
    } else if config.json_logs {
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        )
    } else {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true)
                .boxed(),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    Ok(StructuredLogger { _initialized: true })
}

/// Helper to create structured log entries with consistent formatting.
#[macro_export]
macro_rules! log_event {
    // Info level with subsystem
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Warn level with subsystem
    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Error level with subsystem
    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Debug level with subsystem
    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_levels_and_directives() {
        for level in ["info", "debug", "qc_12_tx_priority=trace,warn"] {
            let config = TelemetryConfig {
                log_level: level.to_string(),
                ..Default::default()
            };
            assert!(env_filter(&config).is_ok(), "{level}");
        }
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = TelemetryConfig {
            log_level: "qc=notalevel".to_string(),
            ..Default::default()
        };
        assert!(matches!(env_filter(&config), Err(TelemetryError::Config(_))));
    }

    #[test]
    fn test_second_init_fails() {
        let config = TelemetryConfig {
            console_output: false,
            ..Default::default()
        };
        // the first call may lose to another test in this binary; the second never succeeds
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(TelemetryError::SubscriberInit(_))
        ));
    }
}
