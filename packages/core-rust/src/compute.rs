//! Synchronous CPU-burn routine for the heavy-load profile.
//!
//! The accumulation deliberately runs as a tight, side-effect-free loop
//! that never yields: it models a handler occupying the processor, not
//! just waiting out the clock. Callers consume the returned sum (the
//! server logs it) so the loop cannot be optimized away.

/// Iteration count for the heavy-load burn.
///
/// One million square-root accumulations land in the hundreds-of-
/// milliseconds range on typical hardware. Exact timing is not a
/// correctness requirement.
pub const BUSY_LOOP_ITERATIONS: u64 = 1_000_000;

/// Accumulates `sqrt(i)` for `i` in `0..iterations` and returns the sum.
///
/// Floating-point accumulation at this iteration count stays well inside
/// `f64` range; overflow is not a concern.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sqrt_accumulate(iterations: u64) -> f64 {
    let mut acc = 0.0_f64;
    for i in 0..iterations {
        acc += (i as f64).sqrt();
    }
    acc
}
