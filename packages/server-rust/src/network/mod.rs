//! HTTP layer: configuration, middleware, lifecycle, and handlers.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod module;
pub mod shutdown;

pub use config::{validate_delay_range, ConfigError, NetworkConfig};
pub use module::ServerModule;
pub use shutdown::{HealthState, ShutdownController};
