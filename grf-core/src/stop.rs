//! Stops visited by a route and the domain objects behind them.

use std::collections::BTreeMap;

use geo::Coord;

use crate::Direction;

/// Value of an order's custom property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    /// Free text.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Boolean flag.
    Flag(bool),
}

impl PropertyValue {
    /// Render the value as display text.
    ///
    /// Text is trimmed, numbers use the shortest round-trip representation
    /// and flags render as `True`/`False`. An empty result means the value
    /// carries nothing worth showing.
    ///
    /// # Examples
    /// ```
    /// use grf_core::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::Number(2.5).formatted(), "2.5");
    /// assert_eq!(PropertyValue::Flag(true).formatted(), "True");
    /// assert!(PropertyValue::Text("  ".into()).formatted().is_empty());
    /// ```
    pub fn formatted(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_owned(),
            Self::Number(number) => number.to_string(),
            Self::Flag(true) => "True".to_owned(),
            Self::Flag(false) => "False".to_owned(),
        }
    }
}

/// A customer order served at a stop.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Display name.
    pub name: String,
    /// Custom property values keyed by property name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_properties: BTreeMap<String, PropertyValue>,
}

impl Order {
    /// Construct an order without custom properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            custom_properties: BTreeMap::new(),
        }
    }

    /// Set a custom property value.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.custom_properties.insert(name.into(), value);
        self
    }
}

/// A depot or renewal location.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Display name.
    pub name: String,
}

impl Location {
    /// Construct a location.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// What a stop represents, together with its associated domain object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum StopKind {
    /// Service of an order.
    Order(Order),
    /// Visit to a depot: start, finish or renewal.
    Location(Location),
    /// Driver break.
    Break,
}

/// A single visit on a route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grf_core::{Order, Stop, StopKind};
///
/// let stop = Stop::new(2, StopKind::Order(Order::new("Acme")))
///     .with_map_location(Coord { x: -117.19, y: 34.05 })
///     .with_time_at_stop(15.0);
/// assert!(!stop.is_break());
/// assert!(stop.directions.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// 1-based visiting order.
    pub sequence_number: u32,
    /// Stop type and associated object.
    pub kind: StopKind,
    /// Own name; used for breaks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Map location, absent only for breaks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub map_location: Option<Coord<f64>>,
    /// Directions leading to this stop; `None` when no geometry was routed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub directions: Option<Vec<Direction>>,
    /// Service time in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_at_stop: f64,
}

impl Stop {
    /// Construct a stop without location, directions or service time.
    pub fn new(sequence_number: u32, kind: StopKind) -> Self {
        Self {
            sequence_number,
            kind,
            name: String::new(),
            map_location: None,
            directions: None,
            time_at_stop: 0.0,
        }
    }

    /// Set the stop's own name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the map location.
    #[must_use]
    pub const fn with_map_location(mut self, location: Coord<f64>) -> Self {
        self.map_location = Some(location);
        self
    }

    /// Attach directions leading to the stop.
    #[must_use]
    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = Some(directions);
        self
    }

    /// Set the service time in minutes.
    #[must_use]
    pub const fn with_time_at_stop(mut self, minutes: f64) -> Self {
        self.time_at_stop = minutes;
        self
    }

    /// Whether the stop is a driver break.
    pub const fn is_break(&self) -> bool {
        matches!(self.kind, StopKind::Break)
    }

    /// Directions leading to the stop, if any were routed.
    pub fn directions(&self) -> Option<&[Direction]> {
        self.directions.as_deref()
    }
}
