//! Shared application state for the mock server.
//!
//! Handlers run concurrently on the tokio runtime, so the simulation
//! record sits behind a mutex; every read and write goes through
//! [`AppState::with_sim`] and the lock is only held for the closure.

use std::sync::Arc;

use parking_lot::Mutex;

use valmock_core::state::SimState;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    sim: Mutex<SimState>,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                sim: Mutex::new(SimState::default()),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    /// Run `f` with the simulation state locked.
    pub fn with_sim<T>(&self, f: impl FnOnce(&mut SimState) -> T) -> T {
        let mut sim = self.inner.sim.lock();
        f(&mut sim)
    }
}
