//! Solved routes ready for export.
//!
//! Aggregates the stops of one vehicle together with the totals reported by
//! the solver.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::Stop;

/// A solved route.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use grf_core::{Location, Route, Stop, StopKind};
///
/// # fn main() -> Result<(), grf_core::RouteError> {
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|date| date.and_hms_opt(8, 0, 0))
///     .expect("valid timestamp");
/// let depot = Stop::new(1, StopKind::Location(Location::new("Depot")))
///     .with_map_location(Coord { x: 0.0, y: 0.0 });
/// let route = Route::new("Truck 1", start, vec![depot])?;
/// assert_eq!(route.sorted_stops().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Route (vehicle) name.
    pub name: String,
    /// Planned departure from the first stop.
    pub start_time: NaiveDateTime,
    /// Driving time in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_time: f64,
    /// Total time in minutes, including service and breaks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_time: f64,
    /// Total distance in miles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_distance: f64,
    /// Stops in any order; see [`Route::sorted_stops`].
    pub stops: Vec<Stop>,
}

/// Errors returned by [`Route::new`] and [`Route::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route has no stops.
    #[error("route must contain at least one stop")]
    Empty,
    /// Sequence numbers are 1-based.
    #[error("stop sequence numbers start at 1")]
    ZeroSequenceNumber,
    /// Two stops share a sequence number.
    #[error("sequence number {0} is used by more than one stop")]
    DuplicateSequenceNumber(u32),
}

impl Route {
    /// Validate and construct a route with zero totals.
    pub fn new(
        name: impl Into<String>,
        start_time: NaiveDateTime,
        stops: Vec<Stop>,
    ) -> Result<Self, RouteError> {
        let route = Self {
            name: name.into(),
            start_time,
            travel_time: 0.0,
            total_time: 0.0,
            total_distance: 0.0,
            stops,
        };
        route.validate()?;
        Ok(route)
    }

    /// Set the solver totals: driving minutes, total minutes and miles.
    #[must_use]
    pub const fn with_totals(mut self, travel_time: f64, total_time: f64, distance: f64) -> Self {
        self.travel_time = travel_time;
        self.total_time = total_time;
        self.total_distance = distance;
        self
    }

    /// Check the stop invariants.
    ///
    /// Deserialised routes bypass [`Route::new`], so callers reading routes
    /// from external sources should validate them explicitly.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.stops.is_empty() {
            return Err(RouteError::Empty);
        }
        let mut seen = HashSet::with_capacity(self.stops.len());
        for stop in &self.stops {
            if stop.sequence_number == 0 {
                return Err(RouteError::ZeroSequenceNumber);
            }
            if !seen.insert(stop.sequence_number) {
                return Err(RouteError::DuplicateSequenceNumber(stop.sequence_number));
            }
        }
        Ok(())
    }

    /// Stops ordered by ascending sequence number.
    pub fn sorted_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self.stops.iter().collect();
        stops.sort_by_key(|stop| stop.sequence_number);
        stops
    }

    /// Whether any stop carries routed directions.
    pub fn has_directions(&self) -> bool {
        self.stops.iter().any(|stop| stop.directions.is_some())
    }
}
