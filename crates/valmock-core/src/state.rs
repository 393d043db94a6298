//! Simulation state for the mock validator.
//!
//! One process-wide record, owned by the server's app state and mutated
//! only through the transition methods below (each backs exactly one
//! admin endpoint). The disable/throttle transitions always write both
//! RPC flags, so `rpc_throttled` is never observable without
//! `rpc_enabled`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds after a simulated restart during which slot lag stays low.
pub const RESTART_CATCHUP_WINDOW_SECS: u64 = 30;

/// A maintenance script invocation recorded by the admin surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    pub name: String,
    pub ts: u64,
}

/// An alert recorded by the admin surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub message: String,
    pub ts: u64,
}

/// Mutable simulation record read by every scrape.
///
/// Logs grow monotonically and are never trimmed or persisted; the whole
/// record dies with the process.
#[derive(Debug, Clone)]
pub struct SimState {
    pub rpc_enabled: bool,
    pub rpc_throttled: bool,
    /// Unix seconds of the last simulated restart, 0 if never.
    pub last_restart: u64,
    pub scripts: Vec<ScriptRun>,
    pub alerts: Vec<AlertRecord>,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            rpc_enabled: true,
            rpc_throttled: false,
            last_restart: 0,
            scripts: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

impl SimState {
    /// Take RPC down. Clears any throttle.
    pub fn disable_rpc(&mut self) {
        self.rpc_enabled = false;
        self.rpc_throttled = false;
        tracing::debug!("rpc disabled");
    }

    /// Bring RPC back to the normal profile. Clears any throttle.
    pub fn enable_rpc(&mut self) {
        self.rpc_enabled = true;
        self.rpc_throttled = false;
        tracing::debug!("rpc enabled");
    }

    /// Degrade RPC: still up, reduced throughput, elevated error rate.
    pub fn throttle_rpc(&mut self) {
        self.rpc_enabled = true;
        self.rpc_throttled = true;
        tracing::debug!("rpc throttled");
    }

    /// Record a simulated restart at `now`.
    pub fn mark_restart(&mut self, now: u64) {
        self.last_restart = now;
        tracing::debug!(last_restart = now, "validator restarted");
    }

    /// Append a maintenance script invocation to the log.
    pub fn record_script(&mut self, name: impl Into<String>, now: u64) {
        let name = name.into();
        tracing::debug!(script = %name, "maintenance script run");
        self.scripts.push(ScriptRun { name, ts: now });
    }

    /// Append an alert to the log.
    pub fn record_alert(&mut self, message: impl Into<String>, now: u64) {
        let message = message.into();
        tracing::debug!(message = %message, "alert recorded");
        self.alerts.push(AlertRecord { message, ts: now });
    }

    /// Whether `now` falls in the post-restart catch-up window.
    pub fn in_restart_window(&self, now: u64) -> bool {
        now.saturating_sub(self.last_restart) < RESTART_CATCHUP_WINDOW_SECS
    }
}

/// Current unix time in seconds. Clamps to 0 on a pre-epoch clock.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
