//! Export command implementation for the GRF CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use grf_codec::{
    ExportContext, ExportOptions, GrfDocument, LossyRemapPolicy, RouteExporter, UnitSystem,
};
use grf_core::{Barrier, ProjectInfo, Route, StaticSolverSettings};
use grf_fs::open_utf8_file;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{self, BufReader, Write};

use crate::{
    ARG_EXPORT_CUSTOM_PROPERTY, ARG_EXPORT_OUTPUT, ARG_EXPORT_REQUEST, ARG_EXPORT_UNITS,
    ARG_EXPORT_WARN_LOSSY_UTURN, CliError, ENV_EXPORT_REQUEST,
};

/// Measurement system accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum UnitsArg {
    /// Kilometres.
    #[default]
    Metric,
    /// Miles.
    Us,
}

impl From<UnitsArg> for UnitSystem {
    fn from(units: UnitsArg) -> Self {
        match units {
            UnitsArg::Metric => Self::Metric,
            UnitsArg::Us => Self::UsCustomary,
        }
    }
}

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Export a solved route as a GRF document for in-cab \
                 navigation devices. The request is a JSON file holding the \
                 route together with optional barriers, project metadata \
                 and solver settings.",
    about = "Export a solved route as a GRF document"
)]
#[ortho_config(prefix = "GRF")]
pub(crate) struct ExportArgs {
    /// Path to a JSON file containing an export request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Destination of the GRF document (defaults to the request with a `.grf` extension).
    #[arg(long = ARG_EXPORT_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Units for lengths shown to the driver.
    #[arg(long = ARG_EXPORT_UNITS, value_enum, value_name = "system")]
    #[serde(default)]
    pub(crate) units: Option<UnitsArg>,
    /// Order custom property to include in stop comments; may be repeated.
    #[arg(long = ARG_EXPORT_CUSTOM_PROPERTY, value_name = "name")]
    #[serde(default)]
    pub(crate) custom_property: Vec<String>,
    /// Report when the U-turn policy can only be exported approximately.
    #[arg(long = ARG_EXPORT_WARN_LOSSY_UTURN)]
    #[serde(default)]
    pub(crate) warn_lossy_uturn: bool,
}

impl ExportArgs {
    pub(crate) fn into_config(self) -> Result<ExportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExportConfig::try_from(merged)
    }
}

/// Resolved `export` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path the GRF document is written to.
    pub(crate) output: Utf8PathBuf,
    /// Units for lengths.
    pub(crate) units: UnitSystem,
    /// Custom properties copied into stop comments.
    pub(crate) custom_properties: Vec<String>,
    /// Reporting of the approximate U-turn remap.
    pub(crate) uturn_remap: LossyRemapPolicy,
}

impl ExportConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_EXPORT_REQUEST)?;
        if self.output == self.request_path {
            return Err(CliError::OutputIsRequest {
                path: self.output.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn options(&self) -> ExportOptions {
        ExportOptions::new(self.units)
            .with_custom_properties(self.custom_properties.iter().cloned())
            .with_uturn_remap(self.uturn_remap)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match grf_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Ok(false) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ExportArgs> for ExportConfig {
    type Error = CliError;

    fn try_from(args: ExportArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_EXPORT_REQUEST,
            env: ENV_EXPORT_REQUEST,
        })?;
        let output = args
            .output
            .unwrap_or_else(|| request_path.with_extension("grf"));
        let uturn_remap = if args.warn_lossy_uturn {
            LossyRemapPolicy::Warn
        } else {
            LossyRemapPolicy::Silent
        };
        Ok(Self {
            request_path,
            output,
            units: args.units.unwrap_or_default().into(),
            custom_properties: args.custom_property,
            uturn_remap,
        })
    }
}

/// JSON payload read by the `export` command.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct ExportRequest {
    /// The solved route.
    pub(crate) route: Route,
    /// Barriers in force while the route is driven.
    #[serde(default)]
    pub(crate) barriers: Vec<Barrier>,
    /// Project metadata such as custom property titles.
    #[serde(default)]
    pub(crate) project: ProjectInfo,
    /// Solver configuration written to the route settings.
    #[serde(default)]
    pub(crate) settings: StaticSolverSettings,
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_export_with(args, &mut handle)
}

pub(crate) fn run_export_with(args: ExportArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_export_config(args)?;
    debug!(
        "exporting {} to {} in {:?}",
        config.request_path, config.output, config.units
    );
    let request = load_export_request(&config.request_path)?;
    request
        .route
        .validate()
        .map_err(|source| CliError::InvalidRoute {
            path: config.request_path.clone(),
            source,
        })?;
    let document = export_request(&request, config.options())?;
    grf_fs::write_atomically(&config.output, document.xml.as_bytes()).map_err(|source| {
        CliError::WriteDocument {
            path: config.output.clone(),
            source,
        }
    })?;
    info!(
        "wrote route {} to {} with {} warning(s)",
        request.route.name,
        config.output,
        document.warnings.len()
    );
    write_warnings(stdout, &document)
}

fn resolve_export_config(args: ExportArgs) -> Result<ExportConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn export_request(
    request: &ExportRequest,
    options: ExportOptions,
) -> Result<GrfDocument, CliError> {
    let context = ExportContext::new(&request.route, &request.project, &request.settings)
        .with_barriers(&request.barriers);
    RouteExporter::new(options)
        .export_document(&context)
        .map_err(|source| CliError::Export { source })
}

/// Loads a JSON-encoded [`ExportRequest`] from disk.
pub(crate) fn load_export_request(path: &Utf8Path) -> Result<ExportRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_warnings(writer: &mut dyn Write, document: &GrfDocument) -> Result<(), CliError> {
    for message in document.warnings.messages() {
        writeln!(writer, "warning: {message}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ExportConfig, CliError> {
    let merged = ExportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ExportConfig::try_from(merged)
}
