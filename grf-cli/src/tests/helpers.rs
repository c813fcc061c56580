//! Test helpers for writing export requests into temporary workspaces.

use crate::export::ExportRequest;
use camino::{Utf8Path, Utf8PathBuf};
use geo::{Geometry, LineString};
use grf_core::test_support::route_with_lunch;
use grf_core::{Barrier, BarrierEffect, ProjectInfo, StaticSolverSettings, UTurnPolicy};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Request for the lunch-break fixture route without barriers.
pub(super) fn lunch_request() -> ExportRequest {
    ExportRequest {
        route: route_with_lunch(),
        barriers: Vec::new(),
        project: ProjectInfo::default(),
        settings: StaticSolverSettings::default(),
    }
}

/// Request whose barriers and U-turn policy can only be exported in part.
pub(super) fn lossy_request() -> ExportRequest {
    let day = route_with_lunch().start_time.date();
    let line = LineString::from(vec![(-117.19, 34.05), (-117.18, 34.06)]);
    ExportRequest {
        barriers: vec![
            Barrier::new("Parade", BarrierEffect::BlockTravel, day, day)
                .with_geometry(Geometry::LineString(line)),
        ],
        settings: StaticSolverSettings::new(UTurnPolicy::AtDeadEndsAndIntersections),
        ..lunch_request()
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &ExportRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}
