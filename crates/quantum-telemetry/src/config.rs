//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration shared by all subsystems.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name for log records
    pub service_name: String,

    /// Subsystem identifier (01-17)
    pub subsystem_id: String,

    /// Log level filter (trace, debug, info, warn, error, or an `EnvFilter` directive)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Network identifier (testnet, mainnet, devnet)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "quantum-chain".to_string(),
            subsystem_id: "00".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "testnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: quantum-chain)
    /// - `QC_SUBSYSTEM_ID`: Subsystem ID (default: 00)
    /// - `QC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `QC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `QC_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    /// - `QC_NETWORK`: Network name (default: testnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "quantum-chain".to_string()),

            subsystem_id: env::var("QC_SUBSYSTEM_ID").unwrap_or_else(|_| "00".to_string()),

            log_level: env::var("QC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("QC_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v, true))
                .unwrap_or(true),

            json_logs: env::var("QC_JSON_LOGS")
                .map(|v| parse_flag(&v, false))
                .unwrap_or(is_container),

            network: env::var("QC_NETWORK").unwrap_or_else(|_| "testnet".to_string()),
        }
    }

    /// Create configuration for a specific subsystem.
    pub fn for_subsystem(subsystem_id: &str, subsystem_name: &str) -> Self {
        let mut config = Self::from_env();
        config.subsystem_id = subsystem_id.to_string();
        config.service_name = format!("qc-{}-{}", subsystem_id, subsystem_name);
        config
    }

    /// Get the full service name including subsystem.
    pub fn full_service_name(&self) -> String {
        if self.subsystem_id == "00" {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.subsystem_id)
        }
    }
}

/// `true`/`1` and `false`/`0` (any case); anything else yields `default`.
fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => default,
    }
}
