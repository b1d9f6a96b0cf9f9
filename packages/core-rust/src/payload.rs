//! Response payload types serialized to the wire.
//!
//! Field names follow the JSON contract consumed by existing load-test
//! harnesses: `message`, `timestamp`, `processingTime`, and `serverInfo`
//! with nested `hostname` / `cpuCount`. `rename_all = "camelCase"` keeps
//! the Rust field names idiomatic while matching that contract exactly.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Environment snapshot included with every response.
///
/// Resolved fresh per request so a payload always reflects the pod and
/// hardware that actually served it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    /// Host identifier, from `HOSTNAME` with a `"localhost"` fallback.
    pub hostname: String,
    /// Logical processor count visible to the runtime.
    pub cpu_count: usize,
}

impl ServerInfo {
    /// Reads the current process environment into a snapshot.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            hostname: crate::host::hostname(),
            cpu_count: crate::host::cpu_count(),
        }
    }
}

/// The body returned by the load-simulation endpoints.
///
/// Constructed fresh per request; nothing here outlives the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    /// Identifies which simulation profile produced the response.
    pub message: String,
    /// Instant the payload was assembled, ISO-8601 in UTC.
    pub timestamp: DateTime<Utc>,
    /// Measured wall-clock milliseconds from request start to assembly.
    /// Includes the randomized wait, any CPU burn, and scheduling jitter,
    /// so it may exceed the drawn delay.
    pub processing_time: u64,
    /// Environment snapshot for the serving host.
    pub server_info: ServerInfo,
}

impl ResponsePayload {
    /// Assembles a payload for a completed simulation.
    ///
    /// `elapsed` is the measured handling duration; millisecond precision
    /// is enough for load-test observations, so anything past 2^64 ms
    /// (584 million years) truncating is academic.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn assemble(message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            processing_time: elapsed.as_millis() as u64,
            server_info: ServerInfo::detect(),
        }
    }
}
