//! Stops a vehicle visits on a route.
//!
//! Coordinates are WGS84 decimal degrees; geometry uses `geo`'s
//! convention of `x = longitude` and `y = latitude`.

use geo::Coord;
use serde::{Deserialize, Serialize};
use time::Time;

time::serde::format_description!(hhmm, Time, "[hour]:[minute]");

/// A point the vehicle must visit.
///
/// Only the coordinates, time window, service time, and priority take
/// part in routing; `name` and `address` are carried for display. The
/// window is soft: arrival inside it is preferred through score
/// penalties, never enforced.
///
/// # Examples
/// ```
/// use fleetroute_core::Stop;
///
/// let stop = Stop::new(52.5200, 13.4050);
/// assert!(stop.id.is_none());
/// assert_eq!(stop.label(3), "stop-3");
/// assert_eq!(stop.location(), geo::Coord { x: 13.4050, y: 52.5200 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Caller-assigned identifier, unique within a request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name; never used in computation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display address; never used in computation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Latitude in decimal degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, within [-180, 180].
    pub longitude: f64,
    /// Earliest preferred arrival, as a local `HH:MM` time.
    #[serde(default, with = "hhmm::option", skip_serializing_if = "Option::is_none")]
    pub time_window_start: Option<Time>,
    /// Latest preferred arrival, as a local `HH:MM` time.
    #[serde(default, with = "hhmm::option", skip_serializing_if = "Option::is_none")]
    pub time_window_end: Option<Time>,
    /// Minutes spent at the stop; the profile default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_time: Option<i32>,
    /// Higher values bias the stop to be visited earlier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Stop {
    /// Construct a stop with coordinates only.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::Stop;
    ///
    /// let stop = Stop::new(48.1351, 11.5820);
    /// assert_eq!(stop.latitude, 48.1351);
    /// assert!(stop.service_time.is_none());
    /// ```
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: None,
            address: None,
            latitude,
            longitude,
            time_window_start: None,
            time_window_end: None,
            service_time: None,
            priority: None,
        }
    }

    /// The stop's position in `geo` axis order.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// The caller's id, or an index-derived placeholder when absent.
    ///
    /// `index` is the stop's position in the request list.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::Stop;
    ///
    /// let mut stop = Stop::new(0.0, 0.0);
    /// assert_eq!(stop.label(7), "stop-7");
    /// stop.id = Some("depot".into());
    /// assert_eq!(stop.label(7), "depot");
    /// ```
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| format!("stop-{index}"))
    }

    /// Minutes of service at this stop, falling back to `default_minutes`.
    #[must_use]
    pub const fn service_minutes_or(&self, default_minutes: i32) -> i32 {
        match self.service_time {
            Some(minutes) => minutes,
            None => default_minutes,
        }
    }
}
