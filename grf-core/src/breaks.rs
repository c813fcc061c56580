//! Placement of driver breaks that have no map location of their own.
//!
//! A break is taken wherever the driver happens to be, so the solver does not
//! always assign it a point. The exporter still needs one; a [`BreakLocator`]
//! picks the stop whose location stands in for the break.

use geo::Coord;

use crate::Stop;

/// Chooses the stop whose location represents a break.
pub trait BreakLocator {
    /// Return the stand-in stop for the break at `break_index` in `stops`.
    ///
    /// `stops` is sorted by sequence number. The returned stop must have a
    /// map location; `None` means the break cannot be placed.
    fn locate<'a>(&self, stops: &[&'a Stop], break_index: usize) -> Option<&'a Stop>;

    /// Map location for the break at `break_index`.
    fn break_location(&self, stops: &[&Stop], break_index: usize) -> Option<Coord<f64>> {
        self.locate(stops, break_index)
            .and_then(|stop| stop.map_location)
    }
}

/// Places a break at the nearest preceding stop with a map location, or the
/// nearest following one when nothing precedes it.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grf_core::{AdjacentStopLocator, BreakLocator, Location, Stop, StopKind};
///
/// let depot = Stop::new(1, StopKind::Location(Location::new("Depot")))
///     .with_map_location(Coord { x: 1.0, y: 2.0 });
/// let lunch = Stop::new(2, StopKind::Break);
/// let stops = [&depot, &lunch];
/// assert_eq!(
///     AdjacentStopLocator.break_location(&stops, 1),
///     Some(Coord { x: 1.0, y: 2.0 })
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AdjacentStopLocator;

impl BreakLocator for AdjacentStopLocator {
    fn locate<'a>(&self, stops: &[&'a Stop], break_index: usize) -> Option<&'a Stop> {
        let (before, after) = stops.split_at(break_index.min(stops.len()));
        let preceding = before
            .iter()
            .rev()
            .find(|stop| stop.map_location.is_some());
        let following = || {
            after
                .iter()
                .skip(1)
                .find(|stop| stop.map_location.is_some())
        };
        preceding.or_else(following).copied()
    }
}
