//! Turn-by-turn directions attached to a stop.

/// Maneuver performed at the start of a direction segment.
///
/// The declaration order is significant: the ordinal of each variant is the
/// basis of the numeric maneuver code written to exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManeuverType {
    /// Maneuver could not be classified.
    Unknown,
    /// Arrival at a stop.
    Stop,
    /// Continue straight ahead.
    Straight,
    /// Bear left.
    BearLeft,
    /// Bear right.
    BearRight,
    /// Turn left.
    TurnLeft,
    /// Turn right.
    TurnRight,
    /// Sharp left turn.
    SharpLeft,
    /// Sharp right turn.
    SharpRight,
    /// Make a U-turn.
    UTurn,
    /// Board a ferry.
    Ferry,
    /// Enter a roundabout.
    Roundabout,
    /// Merge onto a highway.
    HighwayMerge,
    /// Leave a highway.
    HighwayExit,
    /// Change highways.
    HighwayChange,
    /// Keep to the centre at a fork.
    ForkCenter,
    /// Keep left at a fork.
    ForkLeft,
    /// Keep right at a fork.
    ForkRight,
    /// Departure from a stop.
    Depart,
    /// Informational trip item.
    TripItem,
    /// Leave a ferry.
    EndOfFerry,
    /// Take the ramp on the right.
    RampRight,
    /// Take the ramp on the left.
    RampLeft,
    /// Turn left, then immediately right.
    TurnLeftRight,
    /// Turn right, then immediately left.
    TurnRightLeft,
    /// Turn right, then immediately right again.
    TurnRightRight,
    /// Turn left, then immediately left again.
    TurnLeftLeft,
}

impl ManeuverType {
    /// Every maneuver in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Unknown,
        Self::Stop,
        Self::Straight,
        Self::BearLeft,
        Self::BearRight,
        Self::TurnLeft,
        Self::TurnRight,
        Self::SharpLeft,
        Self::SharpRight,
        Self::UTurn,
        Self::Ferry,
        Self::Roundabout,
        Self::HighwayMerge,
        Self::HighwayExit,
        Self::HighwayChange,
        Self::ForkCenter,
        Self::ForkLeft,
        Self::ForkRight,
        Self::Depart,
        Self::TripItem,
        Self::EndOfFerry,
        Self::RampRight,
        Self::RampLeft,
        Self::TurnLeftRight,
        Self::TurnRightLeft,
        Self::TurnRightRight,
        Self::TurnLeftLeft,
    ];
}

/// One maneuver segment of the drive towards a stop.
///
/// # Examples
/// ```
/// use grf_core::{Direction, ManeuverType};
///
/// let direction = Direction::new(ManeuverType::TurnLeft, 0.4, 1.5, "Turn left onto Main St");
/// assert_eq!(direction.maneuver, ManeuverType::TurnLeft);
/// assert!(direction.geometry.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    /// Maneuver starting the segment.
    pub maneuver: ManeuverType,
    /// Segment length in miles.
    pub length: f64,
    /// Segment travel time in minutes.
    pub time: f64,
    /// Human-readable instruction.
    pub text: String,
    /// Compact encoded geometry of the segment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub geometry: String,
}

impl Direction {
    /// Construct a direction without geometry.
    pub fn new(maneuver: ManeuverType, length: f64, time: f64, text: impl Into<String>) -> Self {
        Self {
            maneuver,
            length,
            time,
            text: text.into(),
            geometry: String::new(),
        }
    }

    /// Attach an encoded geometry string.
    #[must_use]
    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = geometry.into();
        self
    }
}
