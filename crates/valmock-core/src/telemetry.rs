//! Synthetic gauge sampling and Prometheus text rendering.
//!
//! Values are drawn fresh on every scrape; the simulation state only
//! shifts the ranges (RPC down/throttled, post-restart catch-up).
//! Rendering follows the text exposition format 0.0.4: `# HELP`,
//! `# TYPE <name> gauge`, then one sample line labeled with the
//! validator id. Metric names and HELP strings are part of the contract:
//! downstream scrapers look samples up by name.

use std::fmt::Write;

use rand::Rng;

use crate::state::SimState;

/// Content type of the rendered exposition.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Slot lag cap applied inside the restart catch-up window.
const RESTART_SLOT_LAG_CAP: u32 = 10;

/// One synthetic scrape of every advertised gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub slot_lag: u32,
    pub vote_success_rate: f64,
    pub cpu_usage: f64,
    pub ram_usage_gb: f64,
    pub disk_usage_pct: f64,
    pub rpc_qps: f64,
    pub rpc_error_rate: f64,
    /// Unix seconds the sample was taken.
    pub timestamp: u64,
}

impl TelemetrySample {
    /// Draw a fresh sample for the current simulation state.
    ///
    /// Read-only over `state`; the RNG is passed in so tests can seed it.
    pub fn generate<R: Rng + ?Sized>(state: &SimState, now: u64, rng: &mut R) -> Self {
        let mut slot_lag = rng.gen_range(0..=150u32);
        if state.in_restart_window(now) {
            slot_lag = slot_lag.min(RESTART_SLOT_LAG_CAP);
        }

        let (rpc_qps, rpc_error_rate) = if !state.rpc_enabled {
            (rng.gen_range(0.0..=5.0), 0.0)
        } else if state.rpc_throttled {
            (rng.gen_range(25.0..=250.0), rng.gen_range(0.05..=0.2))
        } else {
            (rng.gen_range(300.0..=1500.0), rng.gen_range(0.0..=0.05))
        };

        Self {
            slot_lag,
            vote_success_rate: rng.gen_range(0.8..=1.0),
            cpu_usage: rng.gen_range(0.1..=0.95),
            ram_usage_gb: rng.gen_range(8.0..=96.0),
            disk_usage_pct: rng.gen_range(20.0..=95.0),
            rpc_qps,
            rpc_error_rate,
            timestamp: now,
        }
    }

    /// Render in the Prometheus text exposition format.
    pub fn render(&self, validator_id: &str) -> String {
        let id = escape_label(validator_id);
        let mut out = String::new();

        gauge(
            &mut out,
            "validator_slot_lag",
            "Current slot lag",
            &id,
            format_args!("{}", self.slot_lag),
        );
        gauge(
            &mut out,
            "validator_vote_success_rate",
            "Vote success rate",
            &id,
            format_args!("{:.4}", self.vote_success_rate),
        );
        gauge(
            &mut out,
            "validator_cpu_usage",
            "CPU usage fraction",
            &id,
            format_args!("{:.4}", self.cpu_usage),
        );
        gauge(
            &mut out,
            "validator_ram_usage_gb",
            "RAM usage in gigabytes",
            &id,
            format_args!("{:.2}", self.ram_usage_gb),
        );
        gauge(
            &mut out,
            "validator_disk_usage_pct",
            "Disk usage percentage",
            &id,
            format_args!("{:.2}", self.disk_usage_pct),
        );
        gauge(
            &mut out,
            "validator_rpc_qps",
            "RPC queries per second",
            &id,
            format_args!("{:.2}", self.rpc_qps),
        );
        gauge(
            &mut out,
            "validator_rpc_error_rate",
            "RPC error rate fraction",
            &id,
            format_args!("{:.4}", self.rpc_error_rate),
        );
        gauge(
            &mut out,
            "validator_metrics_timestamp",
            "Timestamp of metrics generation",
            &id,
            format_args!("{}", self.timestamp),
        );

        out
    }
}

/// Emit one gauge: HELP, TYPE, and a single labeled sample line.
fn gauge(out: &mut String, name: &str, help: &str, id: &str, value: std::fmt::Arguments<'_>) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} gauge");
    let _ = writeln!(out, "{name}{{id=\"{id}\"}} {value}");
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}
