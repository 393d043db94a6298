//! Mock validator metrics server.
//!
//! Serves fabricated validator telemetry on `/metrics` plus a small
//! admin surface that perturbs it. Configuration comes from the
//! environment (`VALIDATOR_METRICS_PORT`, `VALIDATOR_ID`); a bind
//! failure is fatal with no retry.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use valmock_core::error::{Result, ValMockError};
use valmock_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_env()?;
    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let validator_id = cfg.validator_id.clone();

    let state = AppState::new(cfg);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ValMockError::Internal(format!("bind {listen} failed: {e}")))?;

    // Single stdout marker line; everything else stays behind RUST_LOG.
    println!("[validator-mock] serving metrics for {validator_id} on port {}", listen.port());
    tracing::info!(%listen, %validator_id, "valmock-server started");

    axum::serve(listener, app)
        .await
        .map_err(|e| ValMockError::Internal(format!("server failed: {e}")))?;

    Ok(())
}
