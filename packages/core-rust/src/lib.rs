//! Loadsim Core — delay generation, CPU burn, and response payload assembly.

pub mod compute;
pub mod config;
pub mod delay;
pub mod host;
pub mod payload;

pub use compute::{sqrt_accumulate, BUSY_LOOP_ITERATIONS};
pub use config::SimulatorConfig;
pub use delay::{generate_delay, HEAVY_DELAY_MAX_MS, HEAVY_DELAY_MIN_MS};
pub use payload::{ResponsePayload, ServerInfo};
