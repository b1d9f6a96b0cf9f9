//! Random delay generation for simulated request latency.
//!
//! Delays are drawn with the thread-local RNG: simulation-grade uniformity
//! is all that is needed here, not cryptographic randomness.

use rand::Rng;
use tracing::trace;

/// Lower bound of the heavy-load wait in milliseconds.
pub const HEAVY_DELAY_MIN_MS: u64 = 500;

/// Upper bound of the heavy-load wait in milliseconds.
pub const HEAVY_DELAY_MAX_MS: u64 = 2000;

/// Draws a uniformly distributed integer delay in `[min_ms, max_ms]` inclusive.
///
/// Both bounds are attainable: a load-test operator configuring
/// `min == max` gets a fixed delay, which is useful for repeatable runs.
///
/// # Panics
///
/// Panics if `min_ms > max_ms`. Callers validate the range at startup.
#[must_use]
pub fn generate_delay(min_ms: u64, max_ms: u64) -> u64 {
    let delay_ms = rand::rng().random_range(min_ms..=max_ms);
    trace!(min_ms, max_ms, delay_ms, "drew simulated delay");
    delay_ms
}
