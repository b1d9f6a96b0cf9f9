//! Load-simulation endpoint handlers.

use axum::extract::State;
use axum::Json;
use loadsim_core::ResponsePayload;

use super::AppState;

/// `GET /` -- light-load simulation.
///
/// Suspends for a randomized 10-100ms (configurable) wait, then returns
/// the payload describing the measured handling time and environment.
pub async fn light_load_handler(State(state): State<AppState>) -> Json<ResponsePayload> {
    let _guard = state.shutdown.in_flight_guard();
    Json(state.simulator.simulate_light_load().await)
}

/// `GET /heavy` -- heavy-load simulation.
///
/// Suspends for a randomized 500-2000ms wait, then burns CPU
/// synchronously before responding.
pub async fn heavy_load_handler(State(state): State<AppState>) -> Json<ResponsePayload> {
    let _guard = state.shutdown.in_flight_guard();
    Json(state.simulator.simulate_heavy_load().await)
}
