//! Builders shared by unit, property, and golden tests.
//!
//! Requests built here pin the route date so schedules do not depend on
//! the day a test suite happens to run.

use time::Date;

use crate::{OptimizationRequest, OptimizationType, Stop};

/// Route date used by all pinned fixtures.
pub const PINNED_ROUTE_DATE: Date = time::macros::date!(2025 - 06 - 02);

/// A bare stop at the given coordinates.
#[must_use]
pub const fn stop(latitude: f64, longitude: f64) -> Stop {
    Stop::new(latitude, longitude)
}

/// A stop with a caller-assigned id.
#[must_use]
pub fn identified_stop(id: &str, latitude: f64, longitude: f64) -> Stop {
    Stop {
        id: Some(id.to_owned()),
        ..Stop::new(latitude, longitude)
    }
}

/// A request over `stops` with the route date pinned.
#[must_use]
pub const fn pinned_request(stops: Vec<Stop>) -> OptimizationRequest {
    OptimizationRequest {
        stops,
        vehicle_constraints: None,
        optimization_type: OptimizationType::Distance,
        route_date: Some(PINNED_ROUTE_DATE),
    }
}
