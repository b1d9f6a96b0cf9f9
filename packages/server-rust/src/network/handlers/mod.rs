//! HTTP handler definitions for the loadsim server.
//!
//! Defines `AppState` (the shared state carried through axum extractors)
//! and re-exports the handler functions used to build the router.

pub mod health;
pub mod load;

pub use health::{health_handler, liveness_handler, readiness_handler};
pub use load::{heavy_load_handler, light_load_handler};

use std::sync::Arc;

use crate::network::ShutdownController;
use crate::simulator::Simulator;

/// Shared application state passed to handlers via `State` extraction.
///
/// Everything is behind an `Arc`, so the per-request clone is cheap.
#[derive(Clone)]
pub struct AppState {
    /// The load simulator with its immutable delay configuration.
    pub simulator: Arc<Simulator>,
    /// Shutdown controller for probes and in-flight tracking.
    pub shutdown: Arc<ShutdownController>,
}
