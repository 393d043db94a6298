//! Operational HTTP endpoints.
//!
//! - `/metrics` : Prometheus text format (0.0.4), one fresh draw per scrape

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use valmock_core::state::unix_now;
use valmock_core::telemetry::{TelemetrySample, EXPOSITION_CONTENT_TYPE};

use crate::app_state::AppState;

pub async fn metrics(State(state): State<AppState>) -> Response {
    let now = unix_now();
    let sample = state.with_sim(|sim| TelemetrySample::generate(sim, now, &mut rand::thread_rng()));
    let body = sample.render(&state.cfg().validator_id);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
