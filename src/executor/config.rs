//! HTTP request execution configuration.

use crate::config::{ConfigError, Properties};
use serde::{Deserialize, Serialize};

/// Properties key holding the per-request timeout in seconds.
pub const TIMEOUT_KEY: &str = "TIMEOUT";

/// Timeout applied when the configuration does not name one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for HTTP request execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Request timeout in seconds.
    ///
    /// Maximum time to wait for a complete response (including connection,
    /// headers, and body download).
    pub timeout_secs: u64,
}

impl ExecutionConfig {
    /// Creates a new ExecutionConfig with the given timeout.
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// Reads execution settings from loaded properties.
    ///
    /// `TIMEOUT` is optional; when present it must be a positive whole number
    /// of seconds.
    pub fn from_properties(properties: &Properties) -> Result<Self, ConfigError> {
        let Some(raw) = properties.get(TIMEOUT_KEY) else {
            return Ok(Self::default());
        };

        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Self::new(secs)),
            _ => Err(ConfigError::InvalidValue {
                key: TIMEOUT_KEY.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
