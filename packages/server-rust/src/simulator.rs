//! Load simulation operations bridging the core logic to the async runtime.
//!
//! Each operation draws a randomized wait, suspends via `tokio::time::sleep`
//! (yielding the worker so concurrent requests overlap their waits), and
//! assembles a payload with the measured wall-clock duration. The heavy
//! profile additionally burns CPU synchronously on whichever worker runs it.

use std::time::{Duration, Instant};

use loadsim_core::{
    generate_delay, sqrt_accumulate, ResponsePayload, SimulatorConfig, BUSY_LOOP_ITERATIONS,
    HEAVY_DELAY_MAX_MS, HEAVY_DELAY_MIN_MS,
};
use tracing::debug;

/// Message identifying the light-load (default route) profile.
pub const LIGHT_LOAD_MESSAGE: &str = "Autoscaling test web server";

/// Message identifying the heavy-load profile.
pub const HEAVY_LOAD_MESSAGE: &str = "Heavy load processing complete";

/// Simulates variable-latency, variable-CPU-cost request handling.
///
/// Holds the immutable light-load delay bounds; the heavy profile uses
/// fixed bounds so its measurements stay comparable across runs.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Light-load simulation: a short randomized wait, no CPU work.
    ///
    /// `processingTime` in the returned payload is measured, so it may
    /// exceed the drawn delay by scheduling jitter. That is expected.
    pub async fn simulate_light_load(&self) -> ResponsePayload {
        let started = Instant::now();

        let delay_ms = generate_delay(self.config.min_delay_ms, self.config.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        debug!(delay_ms, "light load wait complete");
        ResponsePayload::assemble(LIGHT_LOAD_MESSAGE, started.elapsed())
    }

    /// Heavy-load simulation: a long randomized wait plus a CPU burn.
    ///
    /// The burn runs synchronously on the worker thread on purpose -- the
    /// endpoint models a handler that occupies the processor, not one that
    /// merely waits out the clock.
    pub async fn simulate_heavy_load(&self) -> ResponsePayload {
        let started = Instant::now();

        let delay_ms = generate_delay(HEAVY_DELAY_MIN_MS, HEAVY_DELAY_MAX_MS);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let accumulated = sqrt_accumulate(BUSY_LOOP_ITERATIONS);
        debug!(delay_ms, accumulated, "heavy load burn complete");

        ResponsePayload::assemble(HEAVY_LOAD_MESSAGE, started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use loadsim_core::host;

    use super::*;

    fn pinned(delay_ms: u64) -> Simulator {
        Simulator::new(SimulatorConfig {
            min_delay_ms: delay_ms,
            max_delay_ms: delay_ms,
        })
    }

    #[tokio::test]
    async fn light_load_waits_at_least_the_lower_bound() {
        let payload = pinned(30).simulate_light_load().await;
        assert!(
            payload.processing_time >= 30,
            "processing_time {} below the 30ms bound",
            payload.processing_time
        );
        assert_eq!(payload.message, LIGHT_LOAD_MESSAGE);
    }

    #[tokio::test]
    async fn light_load_reports_the_runtime_cpu_count() {
        let payload = pinned(5).simulate_light_load().await;
        assert_eq!(payload.server_info.cpu_count, host::cpu_count());
    }

    #[tokio::test]
    async fn repeated_light_loads_vary_only_in_measurements() {
        let simulator = pinned(5);
        let first = simulator.simulate_light_load().await;
        let second = simulator.simulate_light_load().await;

        assert_eq!(first.message, second.message);
        assert_eq!(first.server_info.cpu_count, second.server_info.cpu_count);
        assert_ne!(first.timestamp, second.timestamp);
    }

    #[tokio::test]
    async fn concurrent_light_loads_overlap_their_waits() {
        let simulator = pinned(50);
        let started = Instant::now();

        tokio::join!(
            simulator.simulate_light_load(),
            simulator.simulate_light_load(),
            simulator.simulate_light_load(),
            simulator.simulate_light_load(),
        );

        // Four sequential 50ms waits would take 200ms. Overlapping waits
        // finish in roughly one delay's worth of wall-clock time.
        let elapsed = started.elapsed();
        assert!(
            elapsed < Duration::from_millis(150),
            "concurrent waits took {elapsed:?}, expected well under 200ms"
        );
    }

    #[tokio::test]
    async fn heavy_load_includes_wait_and_burn() {
        let payload = Simulator::new(SimulatorConfig::default())
            .simulate_heavy_load()
            .await;
        assert!(
            payload.processing_time >= HEAVY_DELAY_MIN_MS,
            "processing_time {} below the 500ms bound",
            payload.processing_time
        );
        assert_eq!(payload.message, HEAVY_LOAD_MESSAGE);
    }
}
