//! Schedule construction over a simulated clock.
//!
//! One clock serves both selection scoring and the emitted timestamps,
//! so the schedule can never drift from the decisions that produced it.

use time::{Date, Duration, PrimitiveDateTime, Time};

use crate::route::{OptimizedStop, round_2dp, whole_minutes};

/// Builds per-stop schedules by advancing a single simulated clock.
///
/// The sequencer drives the builder leg by leg: `visit` stamps arrival
/// and departure around the stop's service, `travel` advances the clock
/// between stops and back-fills the previous stop's leg figures. The
/// internal clock keeps fractional seconds; emitted timestamps round to
/// the nearest second.
///
/// # Examples
/// ```
/// use fleetroute_core::ScheduleBuilder;
/// use time::macros::{date, datetime, time};
///
/// let mut builder = ScheduleBuilder::new(date!(2025 - 06 - 02), time!(08:00));
/// builder.visit("depot".into(), 15);
/// builder.travel(10.0, 12.0);
/// builder.visit("customer".into(), 10);
///
/// let stops = builder.finish();
/// assert_eq!(stops.len(), 2);
/// let depot = &stops[0];
/// assert_eq!(depot.departure_time, datetime!(2025-06-02 08:15:00));
/// assert_eq!(depot.distance_to_next, 10.0);
/// assert_eq!(depot.time_to_next, 12);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    now: PrimitiveDateTime,
    stops: Vec<OptimizedStop>,
}

impl ScheduleBuilder {
    /// Start a schedule at `day_start` on `day`.
    #[must_use]
    pub fn new(day: Date, day_start: Time) -> Self {
        Self {
            now: PrimitiveDateTime::new(day, day_start),
            stops: Vec::new(),
        }
    }

    /// The simulated clock, read by the sequencer when scoring.
    #[must_use]
    pub const fn now(&self) -> PrimitiveDateTime {
        self.now
    }

    /// Record arrival at a stop and the service performed there.
    ///
    /// Arrival stamps at the current clock; the clock then advances by
    /// the service duration and departure stamps after it. Sequence
    /// indices follow call order from zero. Leg figures start at zero
    /// and stay there for the final stop.
    pub fn visit(&mut self, stop_id: String, service_minutes: i32) {
        let arrival_time = nearest_second(self.now);
        self.now += Duration::minutes(i64::from(service_minutes));
        let departure_time = nearest_second(self.now);
        self.stops.push(OptimizedStop {
            stop_id,
            sequence: self.stops.len(),
            arrival_time,
            departure_time,
            distance_to_next: 0.0,
            time_to_next: 0,
        });
    }

    /// Record the leg from the last visited stop to the next one.
    ///
    /// Back-fills the previous stop's rounded leg figures and advances
    /// the clock by the unrounded travel time. A leg before any visit
    /// only advances the clock.
    pub fn travel(&mut self, distance_km: f64, travel_minutes: f64) {
        if let Some(previous) = self.stops.last_mut() {
            previous.distance_to_next = round_2dp(distance_km);
            previous.time_to_next = whole_minutes(travel_minutes);
        }
        self.now += minutes_duration(travel_minutes);
    }

    /// Finish and yield the stops in visiting order.
    #[must_use]
    pub fn finish(self) -> Vec<OptimizedStop> {
        self.stops
    }
}

/// Fractional minutes as a clock duration.
pub(crate) fn minutes_duration(minutes: f64) -> Duration {
    Duration::seconds_f64(minutes * 60.0)
}

fn nearest_second(stamp: PrimitiveDateTime) -> PrimitiveDateTime {
    let nanos = i64::from(stamp.nanosecond());
    let truncated = stamp - Duration::nanoseconds(nanos);
    if nanos >= 500_000_000 {
        truncated + Duration::seconds(1)
    } else {
        truncated
    }
}
