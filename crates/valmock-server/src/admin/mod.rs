//! Admin surface: state-perturbing POST endpoints.
//!
//! Every handler applies one simulation-state transition and answers
//! with a small JSON ack. Body parsing is lenient: an empty or
//! malformed payload is treated as `{}`, so these endpoints never fail.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use valmock_core::state::unix_now;

use crate::app_state::AppState;

const UNKNOWN_SCRIPT: &str = "unknown-script";

/// Ack body; `status` stays the first key on the wire.
#[derive(Debug, Serialize)]
pub struct AdminAck {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<String>,
}

impl AdminAck {
    fn status(status: &'static str) -> Self {
        Self { status, script: None }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MaintenanceReq {
    #[serde(default)]
    script: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AlertReq {
    #[serde(default)]
    message: Option<String>,
}

pub async fn disable_rpc(State(state): State<AppState>) -> Json<AdminAck> {
    state.with_sim(|sim| sim.disable_rpc());
    Json(AdminAck::status("rpc_disabled"))
}

pub async fn enable_rpc(State(state): State<AppState>) -> Json<AdminAck> {
    state.with_sim(|sim| sim.enable_rpc());
    Json(AdminAck::status("rpc_enabled"))
}

pub async fn throttle_rpc(State(state): State<AppState>) -> Json<AdminAck> {
    state.with_sim(|sim| sim.throttle_rpc());
    Json(AdminAck::status("rpc_throttled"))
}

pub async fn restart_validator(State(state): State<AppState>) -> Json<AdminAck> {
    state.with_sim(|sim| sim.mark_restart(unix_now()));
    Json(AdminAck::status("restarted"))
}

pub async fn run_script(State(state): State<AppState>, body: Bytes) -> Json<AdminAck> {
    let req: MaintenanceReq = parse_lenient(&body);
    let script = req.script.unwrap_or_else(|| UNKNOWN_SCRIPT.to_string());

    state.with_sim(|sim| sim.record_script(script.clone(), unix_now()));
    Json(AdminAck {
        status: "script_run",
        script: Some(script),
    })
}

pub async fn record_alert(State(state): State<AppState>, body: Bytes) -> Json<AdminAck> {
    let req: AlertReq = parse_lenient(&body);
    let message = req.message.unwrap_or_default();

    state.with_sim(|sim| sim.record_alert(message, unix_now()));
    Json(AdminAck::status("alert_recorded"))
}

/// Empty or malformed JSON collapses to the type's default.
fn parse_lenient<T: Default + for<'de> Deserialize<'de>>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_default()
}
