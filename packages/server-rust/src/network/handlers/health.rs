//! Health and probe endpoint handlers.
//!
//! `/health` keeps the fixed `{"status":"ok"}` body that existing load
//! harnesses assert on. The Kubernetes-style probes live on separate
//! paths so that body never changes shape.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use super::AppState;
use crate::network::HealthState;

/// `GET /health` -- immediate fixed status, no delay, no computation.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /health/live` -- liveness probe, 200 whenever the process responds.
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// `GET /health/ready` -- readiness probe.
///
/// 503 during startup and while draining, so an orchestrator stops
/// routing new load-test traffic to a server that is going away.
pub async fn readiness_handler(State(state): State<AppState>) -> StatusCode {
    if state.shutdown.health_state() == HealthState::Ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use loadsim_core::SimulatorConfig;

    use super::*;
    use crate::network::ShutdownController;
    use crate::simulator::Simulator;

    fn test_state() -> AppState {
        AppState {
            simulator: Arc::new(Simulator::new(SimulatorConfig::default())),
            shutdown: Arc::new(ShutdownController::new()),
        }
    }

    #[tokio::test]
    async fn health_body_is_exactly_status_ok() {
        let Json(body) = health_handler().await;
        assert_eq!(body, json!({ "status": "ok" }));
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn health_body_is_identical_across_calls() {
        let Json(first) = health_handler().await;
        let Json(second) = health_handler().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn liveness_always_returns_200() {
        assert_eq!(liveness_handler().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_returns_503_before_ready() {
        let state = test_state();
        assert_eq!(
            readiness_handler(State(state)).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn readiness_returns_200_when_serving() {
        let state = test_state();
        state.shutdown.set_ready();
        assert_eq!(readiness_handler(State(state)).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_returns_503_while_draining() {
        let state = test_state();
        state.shutdown.set_ready();
        state.shutdown.trigger_shutdown();
        assert_eq!(
            readiness_handler(State(state)).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
