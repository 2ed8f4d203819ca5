//! Selection scoring: objective scaling plus soft window and priority
//! shaping.

use geo::Coord;
use time::{Date, PrimitiveDateTime};

use crate::distance::haversine_km;
use crate::schedule::minutes_duration;
use crate::{OptimizationType, RoutingProfile, Stop};

/// Scores candidate stops against the vehicle's position and clock.
///
/// Lower is better. The objective picks the base unit (kilometres,
/// minutes, or currency), soft time-window penalties are added from the
/// projected arrival, and priority subtracts weight so higher-priority
/// stops win among near-equals. Projected arrival always uses the
/// profile's average speed, whatever the objective.
///
/// Window instants anchor to the route date, so an arrival that slips
/// past midnight still counts as late for that day's windows.
///
/// # Examples
/// ```
/// use fleetroute_core::{OptimizationType, RoutingProfile, SelectionScorer, Stop};
/// use time::macros::{date, datetime};
///
/// let scorer = SelectionScorer::new(
///     OptimizationType::Distance,
///     RoutingProfile::default(),
///     date!(2025 - 06 - 02),
/// );
/// let from = geo::Coord { x: 0.0, y: 0.0 };
/// let near = Stop::new(0.0, 0.1);
/// let far = Stop::new(0.0, 0.5);
///
/// let clock = datetime!(2025-06-02 08:00:00);
/// assert!(scorer.score(from, &near, clock) < scorer.score(from, &far, clock));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectionScorer {
    objective: OptimizationType,
    profile: RoutingProfile,
    day: Date,
}

impl SelectionScorer {
    /// Build a scorer for one request.
    #[must_use]
    pub const fn new(objective: OptimizationType, profile: RoutingProfile, day: Date) -> Self {
        Self {
            objective,
            profile,
            day,
        }
    }

    /// Score `candidate` as the next stop reached from `from` at `clock`.
    ///
    /// The score is unbounded in both directions and never disqualifies
    /// a stop outright: a candidate violating its window can still win
    /// when every alternative scores worse.
    #[must_use]
    pub fn score(&self, from: Coord<f64>, candidate: &Stop, clock: PrimitiveDateTime) -> f64 {
        let distance_km = haversine_km(from, candidate.location());
        let travel_minutes = self.profile.travel_minutes(distance_km);

        let mut score = match self.objective {
            OptimizationType::Distance => distance_km,
            OptimizationType::Time => travel_minutes,
            OptimizationType::Cost => distance_km * self.profile.cost_per_km,
        };

        let projected = clock + minutes_duration(travel_minutes);
        if let Some(start) = candidate.time_window_start
            && projected < PrimitiveDateTime::new(self.day, start)
        {
            score += self.profile.early_arrival_penalty;
        }
        if let Some(end) = candidate.time_window_end
            && projected > PrimitiveDateTime::new(self.day, end)
        {
            score += self.profile.late_arrival_penalty;
        }
        if let Some(priority) = candidate.priority {
            score -= f64::from(priority) * self.profile.priority_weight;
        }
        score
    }
}
