//! Command-line interface for exporting solved routes as GRF documents.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod export;

pub use error::CliError;
use export::{ExportArgs, run_export};

pub(crate) const ARG_EXPORT_REQUEST: &str = "request";
pub(crate) const ARG_EXPORT_OUTPUT: &str = "output";
pub(crate) const ARG_EXPORT_UNITS: &str = "units";
pub(crate) const ARG_EXPORT_CUSTOM_PROPERTY: &str = "custom-property";
pub(crate) const ARG_EXPORT_WARN_LOSSY_UTURN: &str = "warn-lossy-uturn";
pub(crate) const ENV_EXPORT_REQUEST: &str = "GRF_CMDS_EXPORT_REQUEST_PATH";

/// Run the GRF CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Export(args) => run_export(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "grf",
    about = "Export solved delivery routes for navigation devices",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a GRF document for a solved route.
    Export(ExportArgs),
}

#[cfg(test)]
mod tests;
