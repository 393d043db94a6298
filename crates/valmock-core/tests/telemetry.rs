//! Sampling range and exposition rendering tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use valmock_core::state::SimState;
use valmock_core::telemetry::TelemetrySample;

const NOW: u64 = 1_700_000_000;

const GAUGES: [&str; 8] = [
    "validator_slot_lag",
    "validator_vote_success_rate",
    "validator_cpu_usage",
    "validator_ram_usage_gb",
    "validator_disk_usage_pct",
    "validator_rpc_qps",
    "validator_rpc_error_rate",
    "validator_metrics_timestamp",
];

fn sample_line<'a>(body: &'a str, name: &str) -> &'a str {
    let prefix = format!("{name}{{");
    body.lines()
        .find(|l| l.starts_with(&prefix))
        .unwrap_or_else(|| panic!("missing sample line for {name}"))
}

fn sample_value(body: &str, name: &str) -> f64 {
    sample_line(body, name)
        .split_whitespace()
        .last()
        .unwrap()
        .parse()
        .unwrap()
}

#[test]
fn ranges_in_normal_profile() {
    let sim = SimState::default();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let s = TelemetrySample::generate(&sim, NOW, &mut rng);
        assert!(s.slot_lag <= 150);
        assert!((0.8..=1.0).contains(&s.vote_success_rate));
        assert!((0.1..=0.95).contains(&s.cpu_usage));
        assert!((8.0..=96.0).contains(&s.ram_usage_gb));
        assert!((20.0..=95.0).contains(&s.disk_usage_pct));
        assert!((300.0..=1500.0).contains(&s.rpc_qps));
        assert!((0.0..=0.05).contains(&s.rpc_error_rate));
        assert_eq!(s.timestamp, NOW);
    }
}

#[test]
fn ranges_with_rpc_disabled() {
    let mut sim = SimState::default();
    sim.disable_rpc();
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let s = TelemetrySample::generate(&sim, NOW, &mut rng);
        assert!((0.0..=5.0).contains(&s.rpc_qps));
        assert_eq!(s.rpc_error_rate, 0.0);
    }
}

#[test]
fn ranges_with_rpc_throttled() {
    let mut sim = SimState::default();
    sim.throttle_rpc();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let s = TelemetrySample::generate(&sim, NOW, &mut rng);
        assert!((25.0..=250.0).contains(&s.rpc_qps));
        assert!((0.05..=0.2).contains(&s.rpc_error_rate));
    }
}

#[test]
fn restart_window_caps_slot_lag() {
    let mut sim = SimState::default();
    sim.mark_restart(NOW);
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let s = TelemetrySample::generate(&sim, NOW + 5, &mut rng);
        assert!(s.slot_lag <= 10);
    }
    // Outside the window the full range comes back.
    let s = TelemetrySample::generate(&sim, NOW + 31, &mut rng);
    assert!(s.slot_lag <= 150);
}

#[test]
fn render_emits_one_gauge_block_per_metric() {
    let sim = SimState::default();
    let mut rng = StdRng::seed_from_u64(5);
    let body = TelemetrySample::generate(&sim, NOW, &mut rng).render("validator-local");

    for name in GAUGES {
        assert_eq!(
            body.lines().filter(|l| *l == format!("# TYPE {name} gauge")).count(),
            1,
            "expected exactly one TYPE line for {name}"
        );
        assert!(body.contains(&format!("# HELP {name} ")));
        let line = sample_line(&body, name);
        assert!(line.starts_with(&format!("{name}{{id=\"validator-local\"}} ")));
    }

    // Sample lines only for the advertised gauges.
    let samples = body
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count();
    assert_eq!(samples, GAUGES.len());
    assert!(body.ends_with('\n'));
}

#[test]
fn render_uses_fixed_decimal_widths() {
    let sim = SimState::default();
    let mut rng = StdRng::seed_from_u64(6);
    let body = TelemetrySample::generate(&sim, NOW, &mut rng).render("v");

    let decimals = |name: &str| {
        let value = sample_line(&body, name).split_whitespace().last().unwrap();
        value.split('.').nth(1).map(str::len)
    };

    assert_eq!(decimals("validator_vote_success_rate"), Some(4));
    assert_eq!(decimals("validator_cpu_usage"), Some(4));
    assert_eq!(decimals("validator_ram_usage_gb"), Some(2));
    assert_eq!(decimals("validator_disk_usage_pct"), Some(2));
    assert_eq!(decimals("validator_rpc_qps"), Some(2));
    assert_eq!(decimals("validator_rpc_error_rate"), Some(4));
    // Integers carry no fraction at all.
    assert_eq!(decimals("validator_slot_lag"), None);
    assert_eq!(decimals("validator_metrics_timestamp"), None);
    assert_eq!(sample_value(&body, "validator_metrics_timestamp"), NOW as f64);
}

#[test]
fn disabled_rpc_renders_exact_zero_error_rate() {
    let mut sim = SimState::default();
    sim.disable_rpc();
    let mut rng = StdRng::seed_from_u64(7);
    let body = TelemetrySample::generate(&sim, NOW, &mut rng).render("v");

    assert_eq!(
        sample_line(&body, "validator_rpc_error_rate"),
        "validator_rpc_error_rate{id=\"v\"} 0.0000"
    );
    let qps = sample_value(&body, "validator_rpc_qps");
    assert!((0.0..=5.0).contains(&qps));
}

#[test]
fn label_values_are_escaped() {
    let sim = SimState::default();
    let mut rng = StdRng::seed_from_u64(8);
    let body = TelemetrySample::generate(&sim, NOW, &mut rng).render("val\"1\\a");

    assert!(body.contains("validator_slot_lag{id=\"val\\\"1\\\\a\"}"));
}
