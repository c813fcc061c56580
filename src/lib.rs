//! Facade crate for the GRF route exporter.
//!
//! This crate re-exports the route model from `grf-core` and the document
//! exporter from `grf-codec`.
//!
//! # Examples
//! ```
//! use grf_export::{ExportContext, ProjectInfo, Route, RouteExporter, StaticSolverSettings};
//! use grf_export::{Location, Stop, StopKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let start = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .and_then(|date| date.and_hms_opt(8, 0, 0))
//!     .ok_or("invalid timestamp")?;
//! let depot = Stop::new(1, StopKind::Location(Location::new("Depot")))
//!     .with_map_location(geo::Coord { x: -117.19, y: 34.05 });
//! let route = Route::new("Truck 1", start, vec![depot])?;
//! let project = ProjectInfo::default();
//! let settings = StaticSolverSettings::default();
//! let context = ExportContext::new(&route, &project, &settings);
//! let document = RouteExporter::default().export_document(&context)?;
//! assert!(document.xml.contains("<TITLE>Start: Depot</TITLE>"));
//! assert!(document.warnings.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use grf_codec::{
    BacktrackPolicy, ExportContext, ExportError, ExportLabels, ExportOptions, ExportWarning,
    ExportWarnings, GrfDocument, LossyRemapPolicy, RouteExporter, TreeWriter, UnitSystem,
    WriteError, XmlTreeWriter,
};
pub use grf_core::{
    AdjacentStopLocator, Barrier, BarrierEffect, BreakLocator, CustomPropertyInfo, Direction,
    Location, ManeuverType, NetworkAttribute, Order, ProjectInfo, PropertyValue, Restriction,
    Route, RouteError, SolverSettings, StaticSolverSettings, Stop, StopKind, UTurnPolicy,
};
