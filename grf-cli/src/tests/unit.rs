//! Focused unit tests covering export CLI configuration and request handling.

use super::helpers::{lossy_request, lunch_request, workspace, write_request, write_utf8};
use super::*;
use crate::export::{
    ExportConfig, ExportRequest, UnitsArg, config_from_layers_for_test, load_export_request,
    run_export_with,
};
use camino::Utf8PathBuf;
use grf_codec::{LossyRemapPolicy, UnitSystem};
use grf_core::RouteError;
use rstest::rstest;

fn config_for(request_path: Utf8PathBuf) -> ExportConfig {
    ExportConfig {
        output: request_path.with_extension("grf"),
        request_path,
        units: UnitSystem::Metric,
        custom_properties: Vec::new(),
        uturn_remap: LossyRemapPolicy::Silent,
    }
}

fn args_for(request_path: &Utf8PathBuf) -> ExportArgs {
    ExportArgs {
        request_path: Some(request_path.clone()),
        ..ExportArgs::default()
    }
}

#[rstest]
fn converting_export_without_request_errors() {
    let err = ExportConfig::try_from(ExportArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_EXPORT_REQUEST);
            assert_eq!(env, ENV_EXPORT_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn export_config_defaults_output_units_and_remap_policy() {
    let config = ExportConfig::try_from(ExportArgs {
        request_path: Some(Utf8PathBuf::from("routes/truck-7.json")),
        ..ExportArgs::default()
    })
    .expect("config should build");
    assert_eq!(config.output, Utf8PathBuf::from("routes/truck-7.grf"));
    assert_eq!(config.units, UnitSystem::Metric);
    assert!(config.custom_properties.is_empty());
    assert_eq!(config.uturn_remap, LossyRemapPolicy::Silent);
}

#[rstest]
fn command_line_flags_reach_export_options() {
    let cli = Cli::try_parse_from([
        "grf",
        "export",
        "request.json",
        "--units",
        "us",
        "--custom-property",
        "dock",
        "--custom-property",
        "gate",
        "--warn-lossy-uturn",
        "--output",
        "out/route.grf",
    ])
    .expect("arguments parse");
    let Command::Export(args) = cli.command;
    assert_eq!(args.units, Some(UnitsArg::Us));

    let config = ExportConfig::try_from(args).expect("config should build");
    assert_eq!(config.output, Utf8PathBuf::from("out/route.grf"));
    let options = config.options();
    assert_eq!(options.units, UnitSystem::UsCustomary);
    assert_eq!(options.custom_properties, vec!["dock".to_owned(), "gate".to_owned()]);
    assert_eq!(options.uturn_remap, LossyRemapPolicy::Warn);
}

#[rstest]
fn unknown_unit_systems_are_rejected_by_clap() {
    let err = Cli::try_parse_from(["grf", "export", "request.json", "--units", "furlongs"])
        .expect_err("invalid units");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    let err = config_for(request_path.clone())
        .validate_sources()
        .expect_err("missing request");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_EXPORT_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let err = config_for(request_path.clone())
        .validate_sources()
        .expect_err("directory request");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_EXPORT_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_refuses_to_overwrite_the_request() {
    let (_tmp, root) = workspace();
    let request_path = root.join("route.grf");
    write_utf8(&request_path, b"{}");
    let config = ExportConfig {
        output: request_path.clone(),
        ..config_for(request_path.clone())
    };
    let err = config.validate_sources().expect_err("output equals request");
    match err {
        CliError::OutputIsRequest { path } => assert_eq!(path, request_path),
        other => panic!("expected OutputIsRequest, found {other:?}"),
    }
}

#[rstest]
fn load_export_request_decodes_json() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    let request = lossy_request();
    write_request(&request_path, &request);

    let decoded = load_export_request(&request_path).expect("request should decode");
    assert_eq!(decoded, request);
}

#[rstest]
fn load_export_request_defaults_optional_sections() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    let route = lunch_request().route;
    let payload = serde_json::json!({ "route": route });
    write_utf8(&request_path, payload.to_string().as_bytes());

    let decoded = load_export_request(&request_path).expect("request should decode");
    assert_eq!(decoded, lunch_request());
}

#[rstest]
fn load_export_request_rejects_invalid_json() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"{ not valid json");

    let err = load_export_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[rstest]
fn load_export_request_io_error_returns_open_error() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");

    let err = load_export_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = workspace();
    let env_request = root.join("from-env.json");
    let cli_output = root.join("from-cli.grf");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "units": "us",
            "output": root.join("from-file.grf").as_str(),
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
    }));
    composer.push_cli(json!({
        "output": cli_output.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.output, cli_output);
    assert_eq!(config.units, UnitSystem::UsCustomary);
}

#[rstest]
fn run_export_writes_document_without_warnings() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_request(&request_path, &lunch_request());
    let mut stdout = Vec::new();

    run_export_with(args_for(&request_path), &mut stdout).expect("export succeeds");

    let xml = std::fs::read_to_string(root.join("request.grf")).expect("document written");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(xml.contains("<TITLE>Start: Main Depot</TITLE>"));
    assert!(stdout.is_empty());
}

#[rstest]
fn run_export_prints_each_warning_on_its_own_line() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_request(&request_path, &lossy_request());
    let mut stdout = Vec::new();
    let args = ExportArgs {
        warn_lossy_uturn: true,
        ..args_for(&request_path)
    };

    run_export_with(args, &mut stdout).expect("export succeeds");

    let printed = String::from_utf8(stdout).expect("stdout utf-8");
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(
        lines,
        vec![
            "warning: barriers with unsupported geometry were skipped",
            "warning: U-turns at dead ends and intersections were exported as allowed everywhere",
        ]
    );
}

#[rstest]
fn run_export_rejects_invalid_routes_before_writing() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    let mut request: ExportRequest = lunch_request();
    if let Some(stop) = request
        .route
        .stops
        .iter_mut()
        .find(|stop| stop.sequence_number == 2)
    {
        stop.sequence_number = 1;
    }
    write_request(&request_path, &request);

    let err = run_export_with(args_for(&request_path), &mut Vec::new())
        .expect_err("duplicate sequence numbers");
    match err {
        CliError::InvalidRoute { source, .. } => {
            assert_eq!(source, RouteError::DuplicateSequenceNumber(1));
        }
        other => panic!("expected InvalidRoute, found {other:?}"),
    }
    assert!(!root.join("request.grf").exists());
}
