//! Barriers restricting travel on the road network.

use chrono::NaiveDate;
use geo::{Coord, Geometry};

/// How a barrier affects travel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum BarrierEffect {
    /// Travel through the barrier is impossible.
    BlockTravel,
    /// Passing the barrier adds a delay.
    Delay {
        /// Added delay in minutes.
        minutes: f64,
    },
}

/// A barrier active over a range of days.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::{Coord, Geometry, Point};
/// use grf_core::{Barrier, BarrierEffect};
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
/// let barrier = Barrier::new("Closed bridge", BarrierEffect::BlockTravel, day, day)
///     .with_geometry(Geometry::Point(Point::new(1.0, 2.0)));
/// assert!(barrier.is_active_on(day));
/// assert_eq!(barrier.point(), Some(Coord { x: 1.0, y: 2.0 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    /// Display name.
    pub name: String,
    /// Barrier shape; `None` when the barrier was never placed on the map.
    #[cfg_attr(feature = "serde", serde(default))]
    pub geometry: Option<Geometry<f64>>,
    /// Effect on travel.
    pub effect: BarrierEffect,
    /// First active day.
    pub start_date: NaiveDate,
    /// Last active day, inclusive.
    pub finish_date: NaiveDate,
}

impl Barrier {
    /// Construct a barrier without geometry.
    pub fn new(
        name: impl Into<String>,
        effect: BarrierEffect,
        start_date: NaiveDate,
        finish_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            geometry: None,
            effect,
            start_date,
            finish_date,
        }
    }

    /// Attach a geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Whether the barrier applies on `date`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        (self.start_date..=self.finish_date).contains(&date)
    }

    /// Whether the barrier prevents travel entirely.
    pub const fn blocks_travel(&self) -> bool {
        matches!(self.effect, BarrierEffect::BlockTravel)
    }

    /// The barrier's coordinate when its geometry is a point.
    pub fn point(&self) -> Option<Coord<f64>> {
        match self.geometry {
            Some(Geometry::Point(point)) => Some(point.0),
            _ => None,
        }
    }
}
