//! Optimized route outputs and aggregate totals.
//!
//! Rounding happens here and only here: figures stay unrounded while
//! the algorithm runs and are snapped once at the output boundary
//! (2 decimal places for kilometres and currency, whole minutes for
//! durations, whole seconds for timestamps).

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::RoutingProfile;

time::serde::format_description!(
    timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

/// One visited stop in the final order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedStop {
    /// Identifier of the input stop (caller-assigned or placeholder).
    pub stop_id: String,
    /// Zero-based visiting order.
    pub sequence: usize,
    /// When the vehicle arrives.
    #[serde(with = "timestamp")]
    pub arrival_time: PrimitiveDateTime,
    /// When the vehicle leaves after service.
    #[serde(with = "timestamp")]
    pub departure_time: PrimitiveDateTime,
    /// Kilometres to the following stop; 0 for the last stop.
    pub distance_to_next: f64,
    /// Whole travel minutes to the following stop; 0 for the last stop.
    pub time_to_next: i64,
}

/// A complete optimization result.
///
/// `optimized_stops` is always a permutation of the request's stops;
/// partial routes are never produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    /// Route length in kilometres, to 2 decimal places.
    pub total_distance: f64,
    /// Travel plus service in whole minutes.
    pub total_time: i64,
    /// Monetary cost in currency units, to 2 decimal places.
    pub total_cost: f64,
    /// Stops in visiting order.
    pub optimized_stops: Vec<OptimizedStop>,
}

impl OptimizedRoute {
    /// Assemble a route from rounded totals and scheduled stops.
    #[must_use]
    pub const fn new(totals: RouteTotals, optimized_stops: Vec<OptimizedStop>) -> Self {
        Self {
            total_distance: totals.distance_km,
            total_time: totals.minutes,
            total_cost: totals.cost,
            optimized_stops,
        }
    }
}

/// Unrounded figures for one leg between consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegMetrics {
    /// Great-circle length in kilometres.
    pub distance_km: f64,
    /// Travel time in minutes at the profile speed.
    pub travel_minutes: f64,
}

/// Rounded aggregate totals for a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTotals {
    /// Kilometres, to 2 decimal places.
    pub distance_km: f64,
    /// Whole minutes of travel plus service.
    pub minutes: i64,
    /// Currency units, to 2 decimal places.
    pub cost: f64,
}

/// Sum legs and service into rounded route totals.
///
/// Works over the unrounded running figures recorded during
/// sequencing. Cost combines both tariff components:
/// `distance * cost_per_km + hours * cost_per_hour`.
///
/// # Examples
/// ```
/// use fleetroute_core::{LegMetrics, RoutingProfile, aggregate};
///
/// let legs = [LegMetrics { distance_km: 10.0, travel_minutes: 12.0 }];
/// let totals = aggregate(&legs, 30.0, &RoutingProfile::default());
///
/// assert_eq!(totals.distance_km, 10.0);
/// assert_eq!(totals.minutes, 42);
/// assert_eq!(totals.cost, 32.5);
/// ```
#[must_use]
pub fn aggregate(
    legs: &[LegMetrics],
    service_minutes: f64,
    profile: &RoutingProfile,
) -> RouteTotals {
    let distance_km: f64 = legs.iter().map(|leg| leg.distance_km).sum();
    let travel_minutes: f64 = legs.iter().map(|leg| leg.travel_minutes).sum();
    let minutes = travel_minutes + service_minutes;
    let cost = distance_km * profile.cost_per_km + minutes / 60.0 * profile.cost_per_hour;
    RouteTotals {
        distance_km: round_2dp(distance_km),
        minutes: whole_minutes(minutes),
        cost: round_2dp(cost),
    }
}

/// Snap a kilometre or currency figure to 2 decimal places.
pub(crate) fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Snap a duration in minutes to the nearest whole minute.
#[expect(
    clippy::cast_possible_truncation,
    reason = "route durations stay far below i64::MAX minutes"
)]
pub(crate) fn whole_minutes(minutes: f64) -> i64 {
    minutes.round() as i64
}
