//! Behaviour-driven step definitions driving the export CLI scenarios.

use super::helpers::{lossy_request, lunch_request, workspace, write_request, write_utf8};
use super::*;
use crate::export::run_export_with;
use camino::Utf8PathBuf;
use grf_codec::ExportError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct ExportWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ExportWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        let request_path = root.join("request.json");
        Self {
            _tmp: tmp,
            root,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn default_output(&self) -> Utf8PathBuf {
        self.request_path.with_extension("grf")
    }

    fn custom_output(&self) -> Utf8PathBuf {
        self.root.join("out").join("truck-7.grf")
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["grf".to_owned(), "export".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn printed_lines(&self) -> Vec<String> {
        String::from_utf8(self.stdout.borrow().clone())
            .expect("stdout utf-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

#[fixture]
fn world() -> ExportWorld {
    ExportWorld::new()
}

#[given("an export request exists on disk")]
fn request_exists(#[from(world)] world: &ExportWorld) {
    write_request(&world.request_path, &lunch_request());
}

#[given("an export request with line barriers and a lossy U-turn policy exists on disk")]
fn lossy_request_exists(#[from(world)] world: &ExportWorld) {
    write_request(&world.request_path, &lossy_request());
}

#[given("an export request whose stop 4 has no map location exists on disk")]
fn unlocated_request_exists(#[from(world)] world: &ExportWorld) {
    let mut request = lunch_request();
    if let Some(stop) = request
        .route
        .stops
        .iter_mut()
        .find(|stop| stop.sequence_number == 4)
    {
        stop.map_location = None;
    }
    write_request(&world.request_path, &request);
}

#[given("the export request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &ExportWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the export request path")]
fn omit_request_path(#[from(world)] world: &ExportWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("I choose US units and a custom output path")]
fn choose_units_and_output(#[from(world)] world: &ExportWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_EXPORT_UNITS}"),
        "us".to_owned(),
        format!("--{ARG_EXPORT_OUTPUT}"),
        world.custom_output().as_str().to_owned(),
    ]);
}

#[given("I ask to be warned about lossy U-turn policies")]
fn ask_for_lossy_warnings(#[from(world)] world: &ExportWorld) {
    world
        .cli_args
        .borrow_mut()
        .push(format!("--{ARG_EXPORT_WARN_LOSSY_UTURN}"));
}

#[when("I run the export command")]
fn run_export_command(#[from(world)] world: &ExportWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Export(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_export_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &ExportWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the GRF document is written next to the request")]
fn document_next_to_request(#[from(world)] world: &ExportWorld) {
    let xml = std::fs::read_to_string(world.default_output()).expect("document written");
    assert!(xml.contains("<GRFDOC version=\"1.1\">"));
    assert!(xml.contains("<DIRECTIONSLENGTHUNITS value=\"kilometers\"/>"));
}

#[then("the custom output reports distances in miles")]
fn custom_output_in_miles(#[from(world)] world: &ExportWorld) {
    let xml = std::fs::read_to_string(world.custom_output()).expect("document written");
    assert!(xml.contains("<DIRECTIONSLENGTHUNITS value=\"miles\"/>"));
    assert!(xml.contains("<TOTALSTEXT>9.0 mi, 2 hours 47 minutes</TOTALSTEXT>"));
    assert!(!world.default_output().exists());
}

#[then("no warnings are printed")]
fn no_warnings_printed(#[from(world)] world: &ExportWorld) {
    assert!(world.printed_lines().is_empty());
}

#[then("two warnings are printed")]
fn two_warnings_printed(#[from(world)] world: &ExportWorld) {
    let lines = world.printed_lines();
    assert_eq!(lines.len(), 2, "unexpected output: {lines:?}");
    assert!(lines.iter().all(|line| line.starts_with("warning: ")));
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &ExportWorld) {
    match &*world.error() {
        CliError::ParseRequest { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &ExportWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_EXPORT_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because stop 4 has no map location")]
fn command_fails_unlocated_stop(#[from(world)] world: &ExportWorld) {
    match &*world.error() {
        CliError::Export {
            source: ExportError::MissingMapLocation { stop },
        } => assert_eq!(*stop, 4),
        other => panic!("expected MissingMapLocation, found {other:?}"),
    }
}

#[then("no GRF document is written")]
fn no_document_written(#[from(world)] world: &ExportWorld) {
    assert!(!world.default_output().exists());
    let entries: Vec<_> = std::fs::read_dir(&world.root)
        .expect("list workspace")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(entries.len(), 1, "unexpected entries: {entries:?}");
}

macro_rules! register_export_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/export_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ExportWorld) {
            let _ = world;
        }
    };
}

register_export_scenario!(export_happy_path, "exporting a request next to its JSON file");
register_export_scenario!(export_units_and_output, "writing miles to a chosen output path");
register_export_scenario!(
    export_reports_warnings,
    "reporting content that could only be exported in part"
);
register_export_scenario!(export_invalid_json, "rejecting invalid JSON input");
register_export_scenario!(export_missing_request, "rejecting missing request paths");
register_export_scenario!(
    export_unlocated_stop,
    "leaving no document behind when a stop cannot be located"
);
