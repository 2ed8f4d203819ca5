//! `GreedySolver` implementation of the nearest-neighbour heuristic.
//!
//! Selection and scheduling share one simulated clock: the stop chosen by
//! [`SelectionScorer`] is committed to the [`ScheduleBuilder`] before the
//! next sweep, so penalties always see the arrival time the emitted
//! schedule will carry.

use std::time::Instant;

use geo::Coord;
use time::{OffsetDateTime, PrimitiveDateTime};

use fleetroute_core::{
    LegMetrics, OptimizationRequest, OptimizeError, OptimizedRoute, RequestError, RouteSolver,
    RoutingProfile, ScheduleBuilder, SelectionScorer, Stop, aggregate, haversine_km,
};

/// Default cap on stops per request.
const DEFAULT_MAX_STOPS: usize = 500;

/// Configuration for [`GreedySolver`].
#[derive(Debug, Clone, Copy)]
pub struct GreedySolverConfig {
    /// Routing constants driving travel times, penalties, and costs.
    pub profile: RoutingProfile,
    /// Upper bound on stops per request; caps the O(n²) sweep.
    pub max_stops: usize,
}

impl Default for GreedySolverConfig {
    fn default() -> Self {
        Self {
            profile: RoutingProfile::default(),
            max_stops: DEFAULT_MAX_STOPS,
        }
    }
}

/// Nearest-neighbour sequencer with penalty-shaped selection.
///
/// Each iteration scores every unvisited stop from the current position and
/// simulated clock, then commits the cheapest one. Visiting order therefore
/// follows the objective, soft time-window penalties, and stop priorities,
/// while the schedule itself always advances at the profile's average speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver {
    config: GreedySolverConfig,
}

impl GreedySolver {
    /// Construct a solver with the stock routing profile and cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GreedySolverConfig) -> Self {
        Self { config }
    }

    /// Construct a solver that overrides only the routing profile.
    #[must_use]
    pub fn with_profile(profile: RoutingProfile) -> Self {
        Self::with_config(GreedySolverConfig {
            profile,
            ..GreedySolverConfig::default()
        })
    }
}

impl RouteSolver for GreedySolver {
    fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizedRoute, OptimizeError> {
        self.config.profile.validate()?;
        request.validate()?;
        if request.stops.len() > self.config.max_stops {
            return Err(RequestError::TooManyStops {
                actual: request.stops.len(),
                max: self.config.max_stops,
            }
            .into());
        }
        let started_at = Instant::now();
        let profile = self.config.profile;

        let day = request.route_date.unwrap_or_else(|| {
            let today = OffsetDateTime::now_utc().date();
            log::debug!("request carries no route_date; scheduling on {today}");
            today
        });
        let day_start = request
            .working_hours_start()
            .unwrap_or(profile.default_day_start);
        let scorer = SelectionScorer::new(request.optimization_type, profile, day);

        let candidates = resolve_candidates(&request.stops, profile.default_service_minutes);
        let mut visited = vec![false; candidates.len()];
        let mut legs = Vec::with_capacity(candidates.len().saturating_sub(1));
        let mut schedule = ScheduleBuilder::new(day, day_start);
        let mut service_minutes = 0.0_f64;

        // The first stop of the request anchors the route.
        let first = candidates
            .first()
            .ok_or(RequestError::TooFewStops { actual: 0 })?;
        if let Some(seen) = visited.first_mut() {
            *seen = true;
        }
        schedule.visit(first.label.clone(), first.service_minutes);
        service_minutes += f64::from(first.service_minutes);
        let mut at = first.location;

        for _ in 1..candidates.len() {
            let Some(next_index) = select_next(&candidates, &visited, at, schedule.now(), &scorer)?
            else {
                break;
            };
            let Some(next) = candidates.get(next_index) else {
                break;
            };
            let distance_km = haversine_km(at, next.location);
            let leg = LegMetrics {
                distance_km,
                travel_minutes: profile.travel_minutes(distance_km),
            };
            schedule.travel(leg.distance_km, leg.travel_minutes);
            schedule.visit(next.label.clone(), next.service_minutes);
            legs.push(leg);
            service_minutes += f64::from(next.service_minutes);
            if let Some(seen) = visited.get_mut(next_index) {
                *seen = true;
            }
            at = next.location;
        }

        let optimized_stops = schedule.finish();
        debug_assert_eq!(
            optimized_stops.len(),
            candidates.len(),
            "the sweep must schedule every stop exactly once"
        );
        let totals = aggregate(&legs, service_minutes, &profile);
        log::debug!(
            "sequenced {} stops by {} in {:?}",
            optimized_stops.len(),
            request.optimization_type.as_str(),
            started_at.elapsed()
        );
        Ok(OptimizedRoute::new(totals, optimized_stops))
    }
}

/// Per-stop data resolved once before the selection sweeps.
struct Candidate<'a> {
    stop: &'a Stop,
    label: String,
    location: Coord<f64>,
    service_minutes: i32,
}

fn resolve_candidates(stops: &[Stop], default_service_minutes: i32) -> Vec<Candidate<'_>> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| Candidate {
            stop,
            label: stop.label(index),
            location: stop.location(),
            service_minutes: stop.service_minutes_or(default_service_minutes),
        })
        .collect()
}

/// Pick the unvisited candidate with the lowest score.
///
/// Strict `<` keeps the earliest request index among equal scores, which is
/// what makes tie-breaking deterministic.
fn select_next(
    candidates: &[Candidate<'_>],
    visited: &[bool],
    from: Coord<f64>,
    clock: PrimitiveDateTime,
    scorer: &SelectionScorer,
) -> Result<Option<usize>, OptimizeError> {
    let mut best: Option<(usize, f64)> = None;
    for (index, (candidate, seen)) in candidates.iter().zip(visited).enumerate() {
        if *seen {
            continue;
        }
        let score = scorer.score(from, candidate.stop, clock);
        if !score.is_finite() {
            return Err(OptimizeError::NonFiniteScore {
                stop: candidate.label.clone(),
            });
        }
        if best.is_none_or(|(_, incumbent)| score < incumbent) {
            best = Some((index, score));
        }
    }
    Ok(best.map(|(index, _)| index))
}
