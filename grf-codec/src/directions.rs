//! Direction items inside `ROUTERESULT`.
//!
//! Each stop contributes one part. The first stop normally has no directions
//! and contributes nothing; breaks without directions get a synthesized
//! depart/arrive pair so importers still see a leg for them.

use geo::Coord;
use grf_core::{Direction, ManeuverType};

use crate::error::{ExportError, WriteError};
use crate::format::{convert_length, format_length, format_number};
use crate::geometry::{write_encoded_shape, write_path_shape};
use crate::maneuver::{ItemType, legacy_maneuver_code};
use crate::options::ExportOptions;
use crate::stops::ResolvedStop;
use crate::vocabulary::{
    DRIVETEXT, ITEM, ITEMLENGTH, ITEMS, ITEMTEXT, ITEMTIME, ITEMTYPE, MANEUVERTYPE, PARTID,
};
use crate::writer::TreeWriter;

/// Where an item's `SHAPE` comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ShapeSource<'a> {
    Encoded(&'a str),
    Point(Coord<f64>),
}

/// One `ITEM` before it is written.
#[derive(Debug, Clone, PartialEq)]
struct DirectionItem<'a> {
    part: usize,
    maneuver: ManeuverType,
    length: f64,
    time: f64,
    text: &'a str,
    shape: ShapeSource<'a>,
}

/// Fail when a routed route has a stop, other than the first or a break,
/// without directions.
pub(crate) fn check_directions(stops: &[ResolvedStop<'_>]) -> Result<(), ExportError> {
    match stops
        .iter()
        .skip(1)
        .find(|resolved| resolved.stop.directions.is_none() && !resolved.stop.is_break())
    {
        Some(resolved) => Err(ExportError::MissingDirections {
            stop: resolved.stop.sequence_number,
        }),
        None => Ok(()),
    }
}

/// Write `ITEMS` for the stops of a routed route.
pub(crate) fn write_items<T: TreeWriter>(
    writer: &mut T,
    stops: &[ResolvedStop<'_>],
    options: &ExportOptions,
) -> Result<(), WriteError> {
    let items = collect_items(stops, &options.labels.break_label);
    log::debug!("writing {} direction items", items.len());
    writer.start_element(ITEMS)?;
    for item in &items {
        write_item(writer, item, options)?;
    }
    writer.end_element()
}

fn collect_items<'a>(stops: &[ResolvedStop<'a>], break_label: &'a str) -> Vec<DirectionItem<'a>> {
    let mut items = Vec::new();
    let mut part = 0;
    for (index, resolved) in stops.iter().enumerate() {
        let previous_is_break = index
            .checked_sub(1)
            .and_then(|previous| stops.get(previous))
            .is_some_and(|previous| previous.stop.is_break());
        match resolved.stop.directions() {
            Some(directions) => {
                items.extend(directions.iter().enumerate().map(|(position, direction)| {
                    let text = if position == 0 && previous_is_break {
                        break_label
                    } else {
                        direction.text.as_str()
                    };
                    DirectionItem {
                        part,
                        maneuver: direction.maneuver,
                        length: direction.length,
                        time: direction.time,
                        text,
                        shape: ShapeSource::Encoded(&direction.geometry),
                    }
                }));
            }
            None if index == 0 => continue,
            None => {
                let following = stops.get(index + 1..).unwrap_or_default();
                items.extend(synthesize_break_items(
                    part,
                    resolved.point,
                    previous_is_break,
                    following,
                    break_label,
                ));
            }
        }
        part += 1;
    }
    items
}

/// Depart and arrive items for a stop without directions.
///
/// The depart item borrows the first direction of the next routed stop so
/// the leg keeps its geometry, unless the stop itself follows a break.
fn synthesize_break_items<'a>(
    part: usize,
    point: Coord<f64>,
    previous_is_break: bool,
    following: &[ResolvedStop<'a>],
    break_label: &'a str,
) -> [DirectionItem<'a>; 2] {
    let inherited = if previous_is_break {
        None
    } else {
        following
            .iter()
            .filter_map(|resolved| resolved.stop.directions())
            .find_map(<[Direction]>::first)
    };
    let (maneuver, text, shape) = match inherited {
        Some(direction) => (
            direction.maneuver,
            direction.text.as_str(),
            ShapeSource::Encoded(direction.geometry.as_str()),
        ),
        None => (ManeuverType::Depart, break_label, ShapeSource::Point(point)),
    };
    let placeholder = |maneuver: ManeuverType, text: &'a str| DirectionItem {
        part,
        maneuver,
        length: 0.0,
        time: 0.0,
        text,
        shape,
    };
    [
        placeholder(maneuver, text),
        placeholder(ManeuverType::Stop, break_label),
    ]
}

fn write_item<T: TreeWriter>(
    writer: &mut T,
    item: &DirectionItem<'_>,
    options: &ExportOptions,
) -> Result<(), WriteError> {
    writer.start_element(ITEM)?;
    writer.text_element(PARTID, &item.part.to_string())?;
    writer.text_element(
        ITEMLENGTH,
        &format_number(convert_length(item.length, options.units)),
    )?;
    writer.text_element(ITEMTIME, &format_number(item.time))?;
    writer.text_element(
        ITEMTYPE,
        &ItemType::for_maneuver(item.maneuver).code().to_string(),
    )?;
    writer.text_element(ITEMTEXT, item.text)?;
    if item.length > 0.0 {
        writer.text_element(DRIVETEXT, &format_length(item.length, options))?;
    }
    writer.text_element(
        MANEUVERTYPE,
        &legacy_maneuver_code(item.maneuver).to_string(),
    )?;
    match item.shape {
        ShapeSource::Encoded(encoded) => write_encoded_shape(writer, encoded)?,
        ShapeSource::Point(point) => write_path_shape(writer, &[point])?,
    }
    writer.end_element()
}
