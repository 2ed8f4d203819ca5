//! Facade crate for the Fleetroute optimization engine.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! solver implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use fleetroute_core::{
    EARTH_RADIUS_KM, LegMetrics, MIN_STOPS, OptimizationRequest, OptimizationType, OptimizeError,
    OptimizedRoute, OptimizedStop, ProfileError, RequestError, RouteSolver, RouteTotals,
    RoutingProfile, ScheduleBuilder, SelectionScorer, Stop, VehicleConstraints, aggregate,
    haversine_km,
};

#[cfg(feature = "test-support")]
pub use fleetroute_core::test_support;

#[cfg(feature = "solver-greedy")]
pub use fleetroute_solver_greedy::{GreedySolver, GreedySolverConfig};
