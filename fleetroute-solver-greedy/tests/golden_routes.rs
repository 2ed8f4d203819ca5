//! Golden route regression tests for the greedy solver.
//!
//! Each case loads a request and its full expected response from JSON and
//! asserts the solver reproduces the response exactly: visiting order,
//! rounded leg figures, second-rounded timestamps, and totals. Every
//! fixture pins `route_date`, so results do not depend on the day the
//! suite runs.

#![expect(
    clippy::expect_used,
    reason = "regression tests use expect for readable failures"
)]

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use serde::Deserialize;

use fleetroute_core::{OptimizationRequest, RouteSolver};
use fleetroute_solver_greedy::GreedySolver;

/// Deserialised golden route test case.
#[derive(Debug, Deserialize)]
struct GoldenRoute {
    name: String,
    #[expect(dead_code, reason = "kept for documentation in JSON files")]
    description: String,
    request: OptimizationRequest,
    expected: serde_json::Value,
}

/// Load a golden route from the data directory.
fn load_golden_route(filename: &str) -> GoldenRoute {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden_routes/data")
        .join(filename);
    let content = fs::read_to_string(&path).expect("failed to read golden route file");
    serde_json::from_str(&content).expect("failed to parse golden route JSON")
}

#[rstest]
#[case::berlin_courier("berlin_courier.json")]
#[case::window_morning_rush("window_morning_rush.json")]
#[case::priority_dispatch("priority_dispatch.json")]
#[case::meridian_sweep("meridian_sweep.json")]
fn solver_reproduces_golden_route(#[case] filename: &str) {
    let golden = load_golden_route(filename);

    let route = GreedySolver::new()
        .optimize(&golden.request)
        .expect("optimize should succeed");
    let actual = serde_json::to_value(&route).expect("route should serialise");

    assert_eq!(
        actual, golden.expected,
        "route diverged for golden case {}",
        golden.name
    );
}
