//! Axum router wiring (metrics + admin surface).
//!
//! Dispatch is path-first: a known path with the wrong method gets the
//! same 404 as an unknown path, not a 405. The 404 body depends on the
//! method — plain text for GET, JSON for POST.

use axum::{
    handler::Handler,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Json, Router,
};
use serde_json::json;

use crate::{admin, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics).fallback(not_found))
        .route("/admin/rpc/disable", admin_post(admin::disable_rpc))
        .route("/admin/rpc/enable", admin_post(admin::enable_rpc))
        .route("/admin/rpc/throttle", admin_post(admin::throttle_rpc))
        .route("/admin/validator/restart", admin_post(admin::restart_validator))
        .route("/admin/maintenance/run", admin_post(admin::run_script))
        .route("/admin/alert", admin_post(admin::record_alert))
        .fallback(not_found)
        .with_state(state)
}

fn admin_post<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    post(handler).fallback(not_found)
}

async fn not_found(method: Method) -> Response {
    if method == Method::POST {
        (StatusCode::NOT_FOUND, Json(json!({"error": "not_found"}))).into_response()
    } else {
        (StatusCode::NOT_FOUND, "not found").into_response()
    }
}
