//! The `STOPS` section.
//!
//! Stops are resolved to map points before anything is written so that a
//! stop which cannot be placed aborts the export with an untouched sink.

use geo::Coord;
use grf_core::{BreakLocator, ProjectInfo, Stop, StopKind};

use crate::error::{ExportError, WriteError};
use crate::format::format_number;
use crate::location::write_location;
use crate::options::{ExportLabels, ExportOptions};
use crate::vocabulary::{ATTR_ENABLED, DURATION, STOP, STOPS};
use crate::writer::TreeWriter;

const SECONDS_PER_MINUTE: f64 = 60.0;
const TRUE: &str = "True";

/// A stop paired with the point it is drawn at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedStop<'a> {
    pub(crate) stop: &'a Stop,
    pub(crate) point: Coord<f64>,
}

/// Place every stop on the map, in the order given.
///
/// Breaks without a location borrow one from `locator`; any other stop
/// without a location is an error.
pub(crate) fn resolve_stops<'a, L>(
    stops: &[&'a Stop],
    locator: &L,
) -> Result<Vec<ResolvedStop<'a>>, ExportError>
where
    L: BreakLocator + ?Sized,
{
    stops
        .iter()
        .enumerate()
        .map(|(index, &stop)| {
            let point = match stop.map_location {
                Some(point) => point,
                None if stop.is_break() => locator.break_location(stops, index).ok_or(
                    ExportError::UnresolvedBreakLocation {
                        stop: stop.sequence_number,
                    },
                )?,
                None => {
                    return Err(ExportError::MissingMapLocation {
                        stop: stop.sequence_number,
                    });
                }
            };
            Ok(ResolvedStop { stop, point })
        })
        .collect()
}

/// Write `STOPS` with one `STOP` per resolved stop.
pub(crate) fn write_stops<T: TreeWriter>(
    writer: &mut T,
    stops: &[ResolvedStop<'_>],
    project: &ProjectInfo,
    options: &ExportOptions,
) -> Result<(), WriteError> {
    log::debug!("writing {} stops", stops.len());
    let last = stops.len().saturating_sub(1);
    writer.start_element(STOPS)?;
    for (index, resolved) in stops.iter().enumerate() {
        let stop = resolved.stop;
        let title = stop_title(stop, index == last, &options.labels);
        let comments = stop_comments(stop, project, options);
        writer.start_element(STOP)?;
        writer.attribute(ATTR_ENABLED, TRUE)?;
        write_location(
            writer,
            resolved.point,
            &title,
            comments.as_deref().filter(|text| !text.is_empty()),
        )?;
        writer.text_element(DURATION, &format_number(service_seconds(stop)))?;
        writer.end_element()?;
    }
    writer.end_element()
}

/// Display name of a stop.
///
/// Depot visits are prefixed by their role in the route: the first stop is
/// the start, the last is the finish and anything in between is a renewal.
fn stop_title(stop: &Stop, is_last: bool, labels: &ExportLabels) -> String {
    match &stop.kind {
        StopKind::Order(order) => order.name.clone(),
        StopKind::Location(location) => {
            let prefix = if stop.sequence_number == 1 {
                &labels.start_prefix
            } else if is_last {
                &labels.finish_prefix
            } else {
                &labels.renewal_prefix
            };
            format!("{prefix}{}", location.name)
        }
        StopKind::Break => stop.name.clone(),
    }
}

/// `Title: Value` lines for the requested order properties.
fn stop_comments(stop: &Stop, project: &ProjectInfo, options: &ExportOptions) -> Option<String> {
    let StopKind::Order(order) = &stop.kind else {
        return None;
    };
    let lines: Vec<String> = options
        .custom_properties
        .iter()
        .filter_map(|name| {
            let value = order.custom_properties.get(name)?.formatted();
            (!value.is_empty()).then(|| format!("{}: {value}", project.property_title(name)))
        })
        .collect();
    Some(lines.join("\n"))
}

#[expect(clippy::float_arithmetic, reason = "minutes to seconds")]
fn service_seconds(stop: &Stop) -> f64 {
    stop.time_at_stop * SECONDS_PER_MINUTE
}
