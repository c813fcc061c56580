//! Maneuver codes written to direction items.
//!
//! Importers read `MANEUVERTYPE` using a legacy numbering that starts one
//! above the internal maneuver ordinals. The mapping is kept as an explicit
//! table in both directions rather than computed at the call site.

use grf_core::ManeuverType;

/// Distance between an internal maneuver ordinal and its legacy code.
pub const LEGACY_MANEUVER_OFFSET: u8 = 1;

const LEGACY_MANEUVER_CODES: [(ManeuverType, u8); 27] = [
    (ManeuverType::Unknown, 1),
    (ManeuverType::Stop, 2),
    (ManeuverType::Straight, 3),
    (ManeuverType::BearLeft, 4),
    (ManeuverType::BearRight, 5),
    (ManeuverType::TurnLeft, 6),
    (ManeuverType::TurnRight, 7),
    (ManeuverType::SharpLeft, 8),
    (ManeuverType::SharpRight, 9),
    (ManeuverType::UTurn, 10),
    (ManeuverType::Ferry, 11),
    (ManeuverType::Roundabout, 12),
    (ManeuverType::HighwayMerge, 13),
    (ManeuverType::HighwayExit, 14),
    (ManeuverType::HighwayChange, 15),
    (ManeuverType::ForkCenter, 16),
    (ManeuverType::ForkLeft, 17),
    (ManeuverType::ForkRight, 18),
    (ManeuverType::Depart, 19),
    (ManeuverType::TripItem, 20),
    (ManeuverType::EndOfFerry, 21),
    (ManeuverType::RampRight, 22),
    (ManeuverType::RampLeft, 23),
    (ManeuverType::TurnLeftRight, 24),
    (ManeuverType::TurnRightLeft, 25),
    (ManeuverType::TurnRightRight, 26),
    (ManeuverType::TurnLeftLeft, 27),
];

/// Legacy `MANEUVERTYPE` code for a maneuver.
///
/// # Examples
/// ```
/// use grf_codec::maneuver::legacy_maneuver_code;
/// use grf_core::ManeuverType;
///
/// assert_eq!(legacy_maneuver_code(ManeuverType::Unknown), 1);
/// assert_eq!(legacy_maneuver_code(ManeuverType::Depart), 19);
/// ```
#[must_use]
pub fn legacy_maneuver_code(maneuver: ManeuverType) -> u8 {
    LEGACY_MANEUVER_CODES
        .iter()
        .find(|(candidate, _)| *candidate == maneuver)
        .map_or(LEGACY_MANEUVER_OFFSET, |(_, code)| *code)
}

/// Maneuver for a legacy code, if the code is known.
#[must_use]
pub fn maneuver_from_legacy_code(code: u8) -> Option<ManeuverType> {
    LEGACY_MANEUVER_CODES
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|(maneuver, _)| *maneuver)
}

/// Classification written to `ITEMTYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// Leaving a stop.
    Depart,
    /// Reaching a stop.
    Arrive,
    /// Any maneuver along the way.
    NewRoad,
}

impl ItemType {
    /// Item type of a maneuver.
    #[must_use]
    pub const fn for_maneuver(maneuver: ManeuverType) -> Self {
        match maneuver {
            ManeuverType::Depart => Self::Depart,
            ManeuverType::Stop => Self::Arrive,
            _ => Self::NewRoad,
        }
    }

    /// Numeric code written to `ITEMTYPE`.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Depart => 0,
            Self::Arrive => 1,
            Self::NewRoad => 2,
        }
    }
}
