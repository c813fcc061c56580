//! Route fixtures shared by unit and behaviour tests.

use chrono::{NaiveDate, NaiveDateTime};
use geo::Coord;

use crate::{Direction, Location, ManeuverType, Order, Route, Stop, StopKind};

/// Compressed geometry decoding to `(1.0, 2.0)` then `(1.5, 2.5)`.
pub const SAMPLE_GEOMETRY: &str = "+v8+v8+1ug+fk+fk";

/// Fixed departure used by fixtures: 2024-03-01 08:00:00.
pub fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

/// A depot stop at `(x, y)`.
pub fn depot(sequence: u32, name: &str, x: f64, y: f64) -> Stop {
    Stop::new(sequence, StopKind::Location(Location::new(name)))
        .with_map_location(Coord { x, y })
}

/// An order stop at `(x, y)` with ten minutes of service.
pub fn order(sequence: u32, name: &str, x: f64, y: f64) -> Stop {
    Stop::new(sequence, StopKind::Order(Order::new(name)))
        .with_map_location(Coord { x, y })
        .with_time_at_stop(10.0)
}

/// A break stop named "Lunch" without location or directions.
pub fn lunch(sequence: u32, minutes: f64) -> Stop {
    Stop::new(sequence, StopKind::Break)
        .with_name("Lunch")
        .with_time_at_stop(minutes)
}

/// Depart, turn and arrive directions covering `miles` in `minutes`.
pub fn leg(miles: f64, minutes: f64, street: &str) -> Vec<Direction> {
    vec![
        Direction::new(ManeuverType::Depart, 0.0, 0.0, "Start").with_geometry(SAMPLE_GEOMETRY),
        Direction::new(
            ManeuverType::TurnRight,
            miles,
            minutes,
            format!("Turn right onto {street}"),
        )
        .with_geometry(SAMPLE_GEOMETRY),
        Direction::new(ManeuverType::Stop, 0.0, 0.0, "Arrive").with_geometry(SAMPLE_GEOMETRY),
    ]
}

/// Depot, order, lunch, order, depot; the lunch break has no directions.
pub fn route_with_lunch() -> Route {
    let stops = vec![
        depot(1, "Main Depot", -117.19, 34.05),
        order(2, "Acme", -117.18, 34.06).with_directions(leg(2.0, 6.0, "Elm St")),
        lunch(3, 120.0),
        order(4, "Globex", -117.17, 34.07).with_directions(leg(3.0, 9.0, "Oak Ave")),
        depot(5, "Main Depot", -117.19, 34.05).with_directions(leg(4.0, 12.0, "Pine Rd")),
    ];
    Route {
        name: "Truck 7".to_owned(),
        start_time: start_time(),
        travel_time: 27.0,
        total_time: 167.0,
        total_distance: 9.0,
        stops,
    }
}
