//! HTTP server lifecycle with deferred startup.
//!
//! `new()` allocates shared state, `start()` binds the TCP listener, and
//! `serve()` accepts connections until the shutdown future resolves. The
//! split lets the binary log the actual bound port (and lets tests bind
//! port 0) before any traffic is accepted.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::config::NetworkConfig;
use super::handlers::{
    health_handler, heavy_load_handler, light_load_handler, liveness_handler, readiness_handler,
    AppState,
};
use super::middleware::build_http_layers;
use super::shutdown::ShutdownController;
use crate::simulator::Simulator;

/// How long `serve()` waits for in-flight requests after shutdown.
/// Comfortably above the worst-case heavy simulation.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the listener, the simulator, and the shutdown controller for one
/// server instance.
pub struct ServerModule {
    config: NetworkConfig,
    simulator: Arc<Simulator>,
    listener: Option<TcpListener>,
    shutdown: Arc<ShutdownController>,
}

impl ServerModule {
    /// Creates the module without binding any port.
    #[must_use]
    pub fn new(config: NetworkConfig, simulator: Simulator) -> Self {
        Self {
            config,
            simulator: Arc::new(simulator),
            listener: None,
            shutdown: Arc::new(ShutdownController::new()),
        }
    }

    /// Shared handle to the shutdown controller.
    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.shutdown)
    }

    /// Assembles the axum router with all routes and middleware.
    ///
    /// Routes:
    /// - `GET /` -- light-load simulation
    /// - `GET /heavy` -- heavy-load simulation
    /// - `GET /health` -- fixed `{"status":"ok"}` body
    /// - `GET /health/live` -- liveness probe
    /// - `GET /health/ready` -- readiness probe
    #[must_use]
    pub fn build_router(&self) -> Router {
        let state = AppState {
            simulator: Arc::clone(&self.simulator),
            shutdown: Arc::clone(&self.shutdown),
        };

        Router::new()
            .route("/", get(light_load_handler))
            .route("/heavy", get(heavy_load_handler))
            .route("/health", get(health_handler))
            .route("/health/live", get(liveness_handler))
            .route("/health/ready", get(readiness_handler))
            .layer(build_http_layers(&self.config))
            .with_state(state)
    }

    /// Binds the TCP listener and returns the actual bound port.
    ///
    /// With port 0 the OS assigns an ephemeral port, which is what the
    /// returned value reports.
    ///
    /// # Errors
    ///
    /// Returns an error when the address cannot be bound (port in use,
    /// insufficient privileges).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!("listener bound to {}:{}", self.config.host, port);

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves requests until `shutdown` resolves, then drains.
    ///
    /// Requests already started run to completion; the drain step waits
    /// for the in-flight counter to reach zero (up to [`DRAIN_TIMEOUT`]).
    ///
    /// # Errors
    ///
    /// Returns an error on a fatal I/O failure in the accept loop.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called first.
    pub async fn serve(
        mut self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let router = self.build_router();
        let listener = self
            .listener
            .take()
            .expect("start() must be called before serve()");

        self.shutdown.set_ready();
        info!("serving HTTP connections");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        self.shutdown.trigger_shutdown();
        if self.shutdown.wait_for_drain(DRAIN_TIMEOUT).await {
            info!("all in-flight requests drained");
        } else {
            warn!("drain timeout expired with requests still in flight");
        }
        Ok(())
    }
}
