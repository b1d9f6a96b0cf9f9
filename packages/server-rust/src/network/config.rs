//! Network configuration and startup validation.

use std::time::Duration;

use loadsim_core::SimulatorConfig;
use thiserror::Error;

/// Top-level network configuration for the loadsim server.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Bind address for the server.
    pub host: String,
    /// Port to listen on. 0 means OS-assigned (used by tests).
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Maximum time to wait for a request to complete. Must exceed the
    /// worst-case heavy simulation (2s wait plus the CPU burn).
    pub request_timeout: Duration,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Rejected configuration, reported before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Light-load delay bounds where the minimum exceeds the maximum.
    #[error("invalid delay range: min {min_delay_ms}ms exceeds max {max_delay_ms}ms")]
    InvalidDelayRange {
        /// Configured lower bound in milliseconds.
        min_delay_ms: u64,
        /// Configured upper bound in milliseconds.
        max_delay_ms: u64,
    },
}

/// Checks the light-load delay bounds before the server boots.
///
/// The delay generator panics on an inverted range, so the invariant is
/// enforced here, where it surfaces as a clean startup error instead.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDelayRange`] when `min_delay_ms` exceeds
/// `max_delay_ms`.
pub fn validate_delay_range(config: &SimulatorConfig) -> Result<(), ConfigError> {
    if config.min_delay_ms > config.max_delay_ms {
        return Err(ConfigError::InvalidDelayRange {
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms,
        });
    }
    Ok(())
}
