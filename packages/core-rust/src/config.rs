//! Simulation profile configuration.

/// Delay bounds for the light-load route.
///
/// Built once at startup and passed into the simulator; never mutated
/// afterwards. The heavy-load route uses fixed bounds instead
/// ([`crate::delay::HEAVY_DELAY_MIN_MS`] / [`crate::delay::HEAVY_DELAY_MAX_MS`])
/// so heavy-profile measurements stay comparable across deployments.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Lower bound of the randomized wait in milliseconds.
    pub min_delay_ms: u64,
    /// Upper bound of the randomized wait in milliseconds.
    /// Must be >= `min_delay_ms`; validated before the server boots.
    pub max_delay_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 10,
            max_delay_ms: 100,
        }
    }
}
