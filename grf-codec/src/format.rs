//! Locale-invariant text rendering for numbers, lengths and durations.
//!
//! Numeric attribute and element text always uses six fractional digits and
//! a period separator. Display text for lengths and durations clamps tiny
//! values to a "less than" form so drivers never see `0.0 km`.

use chrono::NaiveDateTime;
use geo::Coord;

use crate::options::{ExportOptions, UnitSystem};

/// Kilometres in one statute mile.
pub const KILOMETERS_PER_MILE: f64 = 1.609_344;

/// Smallest length shown as a number; shorter lengths render as `< 0.1`.
pub const MIN_DISPLAYED_LENGTH: f64 = 0.1;

/// Smallest duration, in minutes, shown as a number.
pub const MIN_DISPLAYED_MINUTES: u64 = 1;

const MINUTES_PER_DAY: f64 = 1440.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render a number with exactly six fractional digits.
///
/// Negative zero and values that round to it render as `0.000000`; non-finite
/// values also render as zero because the document format cannot carry them.
///
/// # Examples
/// ```
/// use grf_codec::format::format_number;
///
/// assert_eq!(format_number(600.0), "600.000000");
/// assert_eq!(format_number(-0.0000001), "0.000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        log::debug!("non-finite value {value} written as zero");
        return format_number(0.0);
    }
    let text = format!("{value:.6}");
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|ch| ch == '0' || ch == '.') => {
            magnitude.to_owned()
        }
        _ => text,
    }
}

/// Render a boolean attribute value.
#[must_use]
pub const fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Render a timestamp as `yyyy-MM-ddTHH:mm:ss`.
#[must_use]
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Render a path as `"x1 y1;x2 y2;…;"`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grf_codec::format::format_coords;
///
/// let path = [Coord { x: 1.0, y: 2.0 }, Coord { x: 1.5, y: 2.5 }];
/// assert_eq!(format_coords(&path), "1.000000 2.000000;1.500000 2.500000;");
/// ```
#[must_use]
pub fn format_coords(points: &[Coord<f64>]) -> String {
    points
        .iter()
        .map(|point| format!("{} {};", format_number(point.x), format_number(point.y)))
        .collect()
}

/// Convert a length in miles to the destination unit system.
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion is a floating-point scale"
)]
#[must_use]
pub fn convert_length(miles: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => miles * KILOMETERS_PER_MILE,
        UnitSystem::UsCustomary => miles,
    }
}

/// Convert minutes to a fraction of a day.
#[expect(clippy::float_arithmetic, reason = "duration scaling")]
#[must_use]
pub fn minutes_to_days(minutes: f64) -> f64 {
    minutes / MINUTES_PER_DAY
}

/// Render a length in miles as display text in the destination units.
///
/// # Examples
/// ```
/// use grf_codec::{ExportOptions, UnitSystem};
/// use grf_codec::format::format_length;
///
/// let metric = ExportOptions::new(UnitSystem::Metric);
/// assert_eq!(format_length(0.05, &metric), "< 0.1 km");
/// assert_eq!(format_length(10.0, &metric), "16.1 km");
/// ```
#[must_use]
pub fn format_length(miles: f64, options: &ExportOptions) -> String {
    let value = convert_length(miles, options.units);
    let unit = options.length_unit();
    if value.abs() < MIN_DISPLAYED_LENGTH {
        format!("< {MIN_DISPLAYED_LENGTH:.1} {unit}")
    } else {
        format!("{value:.1} {unit}")
    }
}

/// Render a duration given as a fraction of a day.
///
/// Durations that round to less than a minute render as `< 1 minute`;
/// otherwise zero hour and minute clauses are omitted.
///
/// # Examples
/// ```
/// use grf_codec::ExportOptions;
/// use grf_codec::format::{format_time, minutes_to_days};
///
/// let options = ExportOptions::default();
/// assert_eq!(format_time(minutes_to_days(125.0), &options), "2 hours 5 minutes");
/// assert_eq!(format_time(minutes_to_days(60.0), &options), "1 hour");
/// assert_eq!(format_time(minutes_to_days(0.2), &options), "< 1 minute");
/// ```
#[must_use]
pub fn format_time(days: f64, options: &ExportOptions) -> String {
    let labels = &options.labels;
    let (hours, minutes) = split_hours_minutes(days);
    if hours == 0 && minutes < MIN_DISPLAYED_MINUTES {
        let unit = plural(MIN_DISPLAYED_MINUTES, &labels.minute, &labels.minutes);
        return format!("< {MIN_DISPLAYED_MINUTES} {unit}");
    }
    let mut clauses = Vec::with_capacity(2);
    if hours > 0 {
        clauses.push(format!("{hours} {}", plural(hours, &labels.hour, &labels.hours)));
    }
    if minutes > 0 {
        clauses.push(format!(
            "{minutes} {}",
            plural(minutes, &labels.minute, &labels.minutes)
        ));
    }
    clauses.join(" ")
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "whole minutes are derived from a non-negative, rounded day fraction"
)]
fn split_hours_minutes(days: f64) -> (u64, u64) {
    let total_minutes = (days.max(0.0) * MINUTES_PER_DAY).round();
    let hours = (total_minutes / MINUTES_PER_HOUR).floor();
    let minutes = total_minutes - hours * MINUTES_PER_HOUR;
    (hours as u64, minutes as u64)
}

fn plural<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
