//! Assembly of the complete GRF document.

use grf_core::{AdjacentStopLocator, Barrier, BreakLocator, ProjectInfo, Route, SolverSettings};

use crate::barriers::write_barriers;
use crate::directions::{check_directions, write_items};
use crate::error::{ExportError, WriteError};
use crate::format::{
    convert_length, format_length, format_number, format_time, minutes_to_days,
};
use crate::options::ExportOptions;
use crate::settings::write_route_settings;
use crate::stops::{ResolvedStop, resolve_stops, write_stops};
use crate::vocabulary::{
    ATTR_VERSION, DRIVINGTIME, GRF_VERSION, GRFDOC, LENGTH, ROUTE_INFO, ROUTERESULT, TOTALSTEXT,
    TRAVELTIME,
};
use crate::warnings::ExportWarnings;
use crate::writer::{TreeWriter, XmlTreeWriter};

/// Everything read during one export.
///
/// # Examples
/// ```
/// use grf_codec::ExportContext;
/// use grf_core::{ProjectInfo, StaticSolverSettings};
/// # use chrono::NaiveDate;
/// # use geo::Coord;
/// # use grf_core::{Location, Route, Stop, StopKind};
/// # let start = NaiveDate::from_ymd_opt(2024, 3, 1)
/// #     .and_then(|date| date.and_hms_opt(8, 0, 0))
/// #     .expect("valid timestamp");
/// # let depot = Stop::new(1, StopKind::Location(Location::new("Depot")))
/// #     .with_map_location(Coord { x: 0.0, y: 0.0 });
/// # let route = Route::new("Truck 1", start, vec![depot]).expect("valid route");
///
/// let project = ProjectInfo::default();
/// let settings = StaticSolverSettings::default();
/// let context = ExportContext::new(&route, &project, &settings).with_barriers(&[]);
/// assert!(context.barriers.is_empty());
/// ```
pub struct ExportContext<'a, S: SolverSettings> {
    /// Route to export.
    pub route: &'a Route,
    /// All known barriers; only those active on the route day are used.
    pub barriers: &'a [Barrier],
    /// Project owning the route.
    pub project: &'a ProjectInfo,
    /// Solver configuration used for the route.
    pub settings: &'a S,
    /// Placement of breaks without a map location.
    pub break_locator: &'a dyn BreakLocator,
}

impl<'a, S: SolverSettings> ExportContext<'a, S> {
    /// Context without barriers, placing breaks with [`AdjacentStopLocator`].
    pub fn new(route: &'a Route, project: &'a ProjectInfo, settings: &'a S) -> Self {
        Self {
            route,
            barriers: &[],
            project,
            settings,
            break_locator: &AdjacentStopLocator,
        }
    }

    /// Use `barriers`.
    #[must_use]
    pub const fn with_barriers(mut self, barriers: &'a [Barrier]) -> Self {
        self.barriers = barriers;
        self
    }

    /// Place breaks with `locator`.
    #[must_use]
    pub const fn with_break_locator(mut self, locator: &'a dyn BreakLocator) -> Self {
        self.break_locator = locator;
        self
    }
}

/// A rendered document and the caveats found while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrfDocument {
    /// UTF-8 XML text.
    pub xml: String,
    /// Warnings in the order they were raised.
    pub warnings: ExportWarnings,
}

/// Writes routes as GRF documents.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use grf_codec::{ExportContext, ExportOptions, RouteExporter};
/// use grf_core::{Location, ProjectInfo, Route, StaticSolverSettings, Stop, StopKind};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|date| date.and_hms_opt(8, 0, 0))
///     .ok_or("invalid timestamp")?;
/// let depot = Stop::new(1, StopKind::Location(Location::new("Depot")))
///     .with_map_location(Coord { x: -117.19, y: 34.05 });
/// let route = Route::new("Truck 1", start, vec![depot])?;
/// let project = ProjectInfo::default();
/// let settings = StaticSolverSettings::default();
///
/// let exporter = RouteExporter::new(ExportOptions::default());
/// let document = exporter.export_document(&ExportContext::new(&route, &project, &settings))?;
/// assert!(document.xml.contains("<TITLE>Start: Depot</TITLE>"));
/// assert!(document.warnings.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteExporter {
    options: ExportOptions,
}

impl RouteExporter {
    /// Create an exporter using `options` for every export.
    #[must_use]
    pub const fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Options applied to every export.
    #[must_use]
    pub const fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Write the document for `context` into `writer`.
    ///
    /// Stop problems are reported before the first element is written.
    ///
    /// # Errors
    /// Returns [`ExportError`] when the route is invalid, a stop cannot be
    /// placed, a routed stop lacks directions or the writer fails.
    pub fn export_into<S, T>(
        &self,
        context: &ExportContext<'_, S>,
        writer: &mut T,
    ) -> Result<ExportWarnings, ExportError>
    where
        S: SolverSettings,
        T: TreeWriter,
    {
        let route = context.route;
        route.validate()?;
        let sorted = route.sorted_stops();
        let stops = resolve_stops(&sorted, context.break_locator)?;
        let routed = route.has_directions();
        if routed {
            check_directions(&stops)?;
        }
        log::debug!("exporting route {:?} with {} stops", route.name, stops.len());

        let mut warnings = ExportWarnings::new();
        writer.start_element(GRFDOC)?;
        writer.attribute(ATTR_VERSION, GRF_VERSION)?;
        writer.start_element(ROUTE_INFO)?;
        write_stops(writer, &stops, context.project, &self.options)?;
        write_barriers(
            writer,
            context.barriers,
            route.start_time.date(),
            &mut warnings,
        )?;
        if routed {
            self.write_route_result(writer, route, &stops)?;
        }
        writer.end_element()?;
        write_route_settings(
            writer,
            context.settings,
            route.start_time,
            &self.options,
            &mut warnings,
        )?;
        writer.end_element()?;
        Ok(warnings)
    }

    /// Render the document for `context` as XML text.
    ///
    /// # Errors
    /// Returns [`ExportError`] under the same conditions as
    /// [`RouteExporter::export_into`].
    pub fn export_document<S: SolverSettings>(
        &self,
        context: &ExportContext<'_, S>,
    ) -> Result<GrfDocument, ExportError> {
        let mut writer = XmlTreeWriter::new(Vec::new());
        let warnings = self.export_into(context, &mut writer)?;
        let bytes = writer.finish()?;
        Ok(GrfDocument {
            xml: String::from_utf8_lossy(&bytes).into_owned(),
            warnings,
        })
    }

    fn write_route_result<T: TreeWriter>(
        &self,
        writer: &mut T,
        route: &Route,
        stops: &[ResolvedStop<'_>],
    ) -> Result<(), WriteError> {
        let options = &self.options;
        let totals = format!(
            "{}, {}",
            format_length(route.total_distance, options),
            format_time(minutes_to_days(route.total_time), options)
        );
        writer.start_element(ROUTERESULT)?;
        writer.text_element(TOTALSTEXT, &totals)?;
        writer.text_element(
            LENGTH,
            &format_number(convert_length(route.total_distance, options.units)),
        )?;
        writer.text_element(TRAVELTIME, &format_number(route.total_time))?;
        writer.text_element(DRIVINGTIME, &format_number(route.travel_time))?;
        write_items(writer, stops, options)?;
        writer.end_element()
    }
}
