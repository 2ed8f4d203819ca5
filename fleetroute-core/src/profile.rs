//! Tunable routing constants.
//!
//! Region and fleet differences live in data rather than code: speeds,
//! money rates, window penalties, and scheduling defaults travel as one
//! injectable value.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Time;

time::serde::format_description!(hhmm, Time, "[hour]:[minute]");

const DEFAULT_DAY_START: Time = time::macros::time!(08:00);

/// Routing constants applied across scoring, scheduling, and totals.
///
/// `Default` supplies the stock tariff: 50 km/h, 1.5 units/km,
/// 25 units/hour, early/late window penalties of 1000/5000, a priority
/// weight of 100, 15-minute service stops, and a day starting at 08:00.
/// Every field carries a serde default, so a partial JSON document
/// overrides only what it names.
///
/// # Examples
/// ```
/// use fleetroute_core::RoutingProfile;
///
/// let profile = RoutingProfile::default();
/// assert_eq!(profile.average_speed_kmh, 50.0);
/// assert_eq!(profile.travel_minutes(25.0), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingProfile {
    /// Assumed average travel speed in km/h.
    pub average_speed_kmh: f64,
    /// Monetary rate per kilometre travelled.
    pub cost_per_km: f64,
    /// Monetary rate per hour on the road.
    pub cost_per_hour: f64,
    /// Score penalty when a projected arrival lands before a window opens.
    pub early_arrival_penalty: f64,
    /// Score penalty when a projected arrival lands after a window closes.
    pub late_arrival_penalty: f64,
    /// Score reduction per unit of stop priority.
    pub priority_weight: f64,
    /// Service minutes for stops that do not declare their own.
    pub default_service_minutes: i32,
    /// Day start for requests without a working-hours start.
    #[serde(with = "hhmm")]
    pub default_day_start: Time,
}

impl Default for RoutingProfile {
    fn default() -> Self {
        Self {
            average_speed_kmh: 50.0,
            cost_per_km: 1.5,
            cost_per_hour: 25.0,
            early_arrival_penalty: 1000.0,
            late_arrival_penalty: 5000.0,
            priority_weight: 100.0,
            default_service_minutes: 15,
            default_day_start: DEFAULT_DAY_START,
        }
    }
}

impl RoutingProfile {
    /// Minutes needed to travel `distance_km` at the profile speed.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::RoutingProfile;
    ///
    /// assert_eq!(RoutingProfile::default().travel_minutes(50.0), 60.0);
    /// ```
    #[must_use]
    pub fn travel_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh * 60.0
    }

    /// Reject unusable overrides before they reach the solver.
    ///
    /// # Errors
    /// Returns a [`ProfileError`] naming the first offending field:
    /// speed must be positive and finite, rates and penalties finite
    /// and zero or positive, and the default service time zero or
    /// positive.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(ProfileError::NonPositiveSpeed {
                value: self.average_speed_kmh,
            });
        }
        let rates = [
            ("cost_per_km", self.cost_per_km),
            ("cost_per_hour", self.cost_per_hour),
            ("early_arrival_penalty", self.early_arrival_penalty),
            ("late_arrival_penalty", self.late_arrival_penalty),
            ("priority_weight", self.priority_weight),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::NegativeRate { field, value });
            }
        }
        if self.default_service_minutes < 0 {
            return Err(ProfileError::NegativeServiceDefault {
                minutes: self.default_service_minutes,
            });
        }
        Ok(())
    }
}

/// Errors returned by [`RoutingProfile::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Travel time would be undefined at this speed.
    #[error("average speed must be positive and finite; got {value} km/h")]
    NonPositiveSpeed {
        /// The rejected speed in km/h.
        value: f64,
    },
    /// Rates and penalties must be finite and zero or positive.
    #[error("{field} must be finite and zero or positive; got {value}")]
    NegativeRate {
        /// Name of the offending profile field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The fallback service time must be zero or positive.
    #[error("default service minutes must be zero or positive; got {minutes}")]
    NegativeServiceDefault {
        /// The rejected duration in minutes.
        minutes: i32,
    },
}
