//! The `BARRIERS` section.
//!
//! Only point barriers that block travel can be expressed in the document.
//! Everything else active on the route day is reported as a warning.

use chrono::NaiveDate;
use geo::Coord;
use grf_core::Barrier;

use crate::error::WriteError;
use crate::location::write_location;
use crate::vocabulary::{ATTR_ENABLED, BARRIER, BARRIERS};
use crate::warnings::{ExportWarning, ExportWarnings};
use crate::writer::TreeWriter;

/// Active barriers split by what the document can hold.
#[derive(Debug, Default)]
struct BarrierPartition<'a> {
    blocking_points: Vec<(&'a Barrier, Coord<f64>)>,
    delay_points: usize,
    unsupported: usize,
}

fn partition(barriers: &[Barrier], date: NaiveDate) -> BarrierPartition<'_> {
    let mut partition = BarrierPartition::default();
    for barrier in barriers.iter().filter(|barrier| barrier.is_active_on(date)) {
        if barrier.geometry.is_none() {
            continue;
        }
        match barrier.point() {
            Some(point) if barrier.blocks_travel() => {
                partition.blocking_points.push((barrier, point));
            }
            Some(_) => partition.delay_points += 1,
            None => partition.unsupported += 1,
        }
    }
    partition
}

/// Write the block barriers active on `date`, recording what was skipped.
///
/// Nothing is written when no active point barrier blocks travel.
pub(crate) fn write_barriers<T: TreeWriter>(
    writer: &mut T,
    barriers: &[Barrier],
    date: NaiveDate,
    warnings: &mut ExportWarnings,
) -> Result<(), WriteError> {
    let active = partition(barriers, date);
    if active.unsupported > 0 {
        warnings.push(ExportWarning::UnsupportedBarrierGeometry);
    }
    if active.delay_points > 0 {
        warnings.push(ExportWarning::DelayBarriersNotSupported);
    }
    if active.blocking_points.is_empty() {
        return Ok(());
    }
    log::debug!("writing {} barriers", active.blocking_points.len());
    writer.start_element(BARRIERS)?;
    for (barrier, point) in active.blocking_points {
        writer.start_element(BARRIER)?;
        writer.attribute(ATTR_ENABLED, "True")?;
        write_location(writer, point, &barrier.name, Some(""))?;
        writer.end_element()?;
    }
    writer.end_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, LineString, Point};
    use grf_core::BarrierEffect;
    use rstest::{fixture, rstest};

    #[fixture]
    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn point_barrier(name: &str, effect: BarrierEffect, day: NaiveDate) -> Barrier {
        Barrier::new(name, effect, day, day).with_geometry(Geometry::Point(Point::new(1.0, 2.0)))
    }

    fn line_barrier(day: NaiveDate) -> Barrier {
        let line = LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
        Barrier::new("line", BarrierEffect::BlockTravel, day, day)
            .with_geometry(Geometry::LineString(line))
    }

    #[rstest]
    fn inactive_and_unplaced_barriers_are_ignored(day: NaiveDate) {
        let tomorrow = day.succ_opt().expect("next day");
        let barriers = vec![
            point_barrier("later", BarrierEffect::BlockTravel, tomorrow),
            Barrier::new("unplaced", BarrierEffect::BlockTravel, day, day),
        ];
        let partition = partition(&barriers, day);
        assert!(partition.blocking_points.is_empty());
        assert_eq!(partition.delay_points, 0);
        assert_eq!(partition.unsupported, 0);
    }

    #[rstest]
    fn non_point_geometry_warns_once(day: NaiveDate) {
        let barriers = vec![line_barrier(day), line_barrier(day)];
        let mut warnings = ExportWarnings::new();
        let mut writer = crate::test_support::TreeRecorder::new();
        write_barriers(&mut writer, &barriers, day, &mut warnings).expect("written");
        assert_eq!(warnings.len(), 1);
        assert!(warnings.contains(ExportWarning::UnsupportedBarrierGeometry));
        assert!(writer.is_untouched());
    }

    #[rstest]
    fn delay_barriers_warn_but_block_barriers_are_written(day: NaiveDate) {
        let barriers = vec![
            point_barrier("Closed bridge", BarrierEffect::BlockTravel, day),
            point_barrier("Road works", BarrierEffect::Delay { minutes: 10.0 }, day),
        ];
        let mut warnings = ExportWarnings::new();
        let mut writer = crate::test_support::TreeRecorder::new();
        write_barriers(&mut writer, &barriers, day, &mut warnings).expect("written");
        assert!(warnings.contains(ExportWarning::DelayBarriersNotSupported));
        let root = writer.into_root().expect("section written");
        assert_eq!(root.name, BARRIERS);
        let titles: Vec<&str> = root
            .children_named(BARRIER)
            .filter_map(|barrier| barrier.path(&["LOCATION", "TITLE"]))
            .map(|title| title.text.as_str())
            .collect();
        assert_eq!(titles, vec!["Closed bridge"]);
    }
}
