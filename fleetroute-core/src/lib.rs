//! Core domain types for the Fleetroute optimization engine.
//!
//! The crate holds everything a solver strategy needs and nothing it
//! should own itself: wire-shaped request and response types, boundary
//! validation, the injectable [`RoutingProfile`], the distance and
//! scoring models, the schedule builder, and the [`RouteSolver`] seam
//! that strategy crates implement.
//!
//! # Examples
//! ```
//! use fleetroute_core::{OptimizationRequest, Stop};
//!
//! let request = OptimizationRequest::new(vec![
//!     Stop::new(52.5200, 13.4050),
//!     Stop::new(48.1351, 11.5820),
//! ]);
//! assert!(request.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod distance;
mod profile;
mod request;
mod route;
mod schedule;
mod score;
mod solver;
mod stop;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use profile::{ProfileError, RoutingProfile};
pub use request::{
    MIN_STOPS, OptimizationRequest, OptimizationType, RequestError, VehicleConstraints,
};
pub use route::{LegMetrics, OptimizedRoute, OptimizedStop, RouteTotals, aggregate};
pub use schedule::ScheduleBuilder;
pub use score::SelectionScorer;
pub use solver::{OptimizeError, RouteSolver};
pub use stop::Stop;
