//! Error types emitted by the GRF CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use grf_codec::ExportError;
use grf_core::RouteError;
use thiserror::Error;

/// Errors emitted by the GRF CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output path would overwrite the request.
    #[error("output path {path:?} is the export request itself")]
    OutputIsRequest { path: Utf8PathBuf },
    /// Opening the export request file failed.
    #[error("failed to open export request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Export request JSON could not be decoded.
    #[error("failed to parse export request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The route in the request breaks a model invariant.
    #[error("route in {path:?} failed validation: {source}")]
    InvalidRoute {
        path: Utf8PathBuf,
        #[source]
        source: RouteError,
    },
    /// The exporter rejected the route.
    #[error("export failed: {source}")]
    Export {
        #[source]
        source: ExportError,
    },
    /// Writing the GRF document failed.
    #[error("failed to write GRF document to {path:?}: {source}")]
    WriteDocument {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing warnings to the output stream failed.
    #[error("failed to write command output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
