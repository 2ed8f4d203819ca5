//! Optimization requests and their boundary validation.
//!
//! Preconditions are enforced here, before any distance or schedule
//! math runs; the algorithm itself assumes validated input.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, Time};

use crate::Stop;

time::serde::format_description!(hhmm, Time, "[hour]:[minute]");
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Routing requires an origin and at least one destination.
pub const MIN_STOPS: usize = 2;

const MAX_ABS_LATITUDE: f64 = 90.0;
const MAX_ABS_LONGITUDE: f64 = 180.0;

/// Objective the selection score primarily minimises.
///
/// # Examples
/// ```
/// use fleetroute_core::OptimizationType;
///
/// assert_eq!(OptimizationType::default(), OptimizationType::Distance);
/// assert_eq!(OptimizationType::Time.as_str(), "time");
/// assert_eq!(OptimizationType::Cost.to_string(), "cost");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationType {
    /// Great-circle distance in kilometres.
    #[default]
    Distance,
    /// Travel time in minutes at the profile's average speed.
    Time,
    /// Monetary cost at the profile's per-kilometre rate.
    Cost,
}

impl OptimizationType {
    /// Return the objective as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Cost => "cost",
        }
    }
}

impl std::fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptimizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "time" => Ok(Self::Time),
            "cost" => Ok(Self::Cost),
            _ => Err(format!("unknown optimization type '{s}'")),
        }
    }
}

/// Optional shift bounds for the vehicle.
///
/// Only the working-hours start steers the current heuristic (it seeds
/// the simulated clock). The remaining fields are accepted and carried
/// for future hard-constraint checks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleConstraints {
    /// Shift start; the profile's day start applies when absent.
    #[serde(default, with = "hhmm::option", skip_serializing_if = "Option::is_none")]
    pub working_hours_start: Option<Time>,
    /// Shift end; not enforced by the greedy heuristic.
    #[serde(default, with = "hhmm::option", skip_serializing_if = "Option::is_none")]
    pub working_hours_end: Option<Time>,
    /// Vehicle capacity; not enforced by the greedy heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// Maximum route length in km; not enforced by the greedy heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
}

/// The unit of work: stops to order plus how to judge the ordering.
///
/// # Examples
/// ```
/// use fleetroute_core::{OptimizationRequest, Stop};
///
/// let request = OptimizationRequest::new(vec![
///     Stop::new(52.5200, 13.4050),
///     Stop::new(48.1351, 11.5820),
/// ]);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Stops to visit; the first entry anchors the route.
    pub stops: Vec<Stop>,
    /// Optional shift bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_constraints: Option<VehicleConstraints>,
    /// Objective to minimise; distance when absent.
    #[serde(default)]
    pub optimization_type: OptimizationType,
    /// Calendar date the schedule anchors to; the processing date when
    /// absent. Pin it to make responses reproducible across days.
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub route_date: Option<Date>,
}

impl OptimizationRequest {
    /// Construct a request with default objective and no constraints.
    #[must_use]
    pub const fn new(stops: Vec<Stop>) -> Self {
        Self {
            stops,
            vehicle_constraints: None,
            optimization_type: OptimizationType::Distance,
            route_date: None,
        }
    }

    /// The configured shift start, when one was supplied.
    #[must_use]
    pub fn working_hours_start(&self) -> Option<Time> {
        self.vehicle_constraints
            .as_ref()
            .and_then(|constraints| constraints.working_hours_start)
    }

    /// Check every boundary precondition without touching the algorithm.
    ///
    /// # Errors
    /// Returns the first violated precondition: too few stops,
    /// non-finite or out-of-range coordinates, a negative service time,
    /// or an inverted time window.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::{OptimizationRequest, RequestError, Stop};
    ///
    /// let request = OptimizationRequest::new(vec![Stop::new(0.0, 0.0)]);
    /// assert_eq!(
    ///     request.validate(),
    ///     Err(RequestError::TooFewStops { actual: 1 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.stops.len() < MIN_STOPS {
            return Err(RequestError::TooFewStops {
                actual: self.stops.len(),
            });
        }
        for (index, stop) in self.stops.iter().enumerate() {
            validate_stop(stop, index)?;
        }
        Ok(())
    }
}

fn validate_stop(stop: &Stop, index: usize) -> Result<(), RequestError> {
    if !stop.latitude.is_finite() || !stop.longitude.is_finite() {
        return Err(RequestError::NonFiniteCoordinate {
            stop: stop.label(index),
        });
    }
    if stop.latitude.abs() > MAX_ABS_LATITUDE || stop.longitude.abs() > MAX_ABS_LONGITUDE {
        return Err(RequestError::CoordinateOutOfRange {
            stop: stop.label(index),
            latitude: stop.latitude,
            longitude: stop.longitude,
        });
    }
    if let Some(minutes) = stop.service_time
        && minutes < 0
    {
        return Err(RequestError::NegativeServiceTime {
            stop: stop.label(index),
            minutes,
        });
    }
    if let (Some(start), Some(end)) = (stop.time_window_start, stop.time_window_end)
        && start > end
    {
        return Err(RequestError::InvertedTimeWindow {
            stop: stop.label(index),
            start,
            end,
        });
    }
    Ok(())
}

/// Violated request preconditions.
///
/// Each variant names the offending stop by its resolved label so the
/// caller can fix the input without re-deriving indices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Fewer stops than a route needs.
    #[error("request has {actual} stop(s); at least 2 are required")]
    TooFewStops {
        /// Number of stops supplied.
        actual: usize,
    },
    /// More stops than the solver accepts in one request.
    #[error("request has {actual} stops; the solver accepts at most {max}")]
    TooManyStops {
        /// Number of stops supplied.
        actual: usize,
        /// The solver's configured cap.
        max: usize,
    },
    /// A latitude or longitude was NaN or infinite.
    #[error("stop {stop} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Label of the offending stop.
        stop: String,
    },
    /// Coordinates fell outside WGS84 bounds.
    #[error("stop {stop} is outside WGS84 bounds (latitude {latitude}, longitude {longitude})")]
    CoordinateOutOfRange {
        /// Label of the offending stop.
        stop: String,
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },
    /// Service time must be zero or positive.
    #[error("stop {stop} has a negative service time of {minutes} minutes")]
    NegativeServiceTime {
        /// Label of the offending stop.
        stop: String,
        /// The rejected duration in minutes.
        minutes: i32,
    },
    /// A window opening after it closes carries no meaning.
    #[error("stop {stop} has an inverted time window ({start} > {end})")]
    InvertedTimeWindow {
        /// Label of the offending stop.
        stop: String,
        /// The declared window start.
        start: Time,
        /// The declared window end.
        end: Time,
    },
}
