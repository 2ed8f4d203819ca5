//! Focused unit tests covering solve CLI configuration and request parsing.

use super::helpers::{sample_request, write_utf8};
use super::*;
use crate::solve::{SolveConfig, config_from_layers_for_test, load_request, run_solve_with};
use camino::Utf8PathBuf;
use fleetroute_core::OptimizationType;
use rstest::rstest;
use tempfile::TempDir;

#[derive(Debug, Copy, Clone)]
enum MissingSource {
    Request,
    Profile,
}

#[rstest]
fn converting_solve_without_request_errors() {
    let args = SolveArgs {
        request: None,
        ..SolveArgs::default()
    };

    let err = SolveConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(env, ENV_SOLVE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::lowercase("cost", OptimizationType::Cost)]
#[case::uppercase("TIME", OptimizationType::Time)]
fn converting_solve_parses_objective(#[case] raw: &str, #[case] expected: OptimizationType) {
    let args = SolveArgs {
        request: Some(Utf8PathBuf::from("request.json")),
        objective: Some(raw.to_string()),
        ..SolveArgs::default()
    };

    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.objective, Some(expected));
}

#[rstest]
fn converting_solve_rejects_unknown_objective() {
    let args = SolveArgs {
        request: Some(Utf8PathBuf::from("request.json")),
        objective: Some("fastest".to_string()),
        ..SolveArgs::default()
    };

    let err = SolveConfig::try_from(args).expect_err("unknown objective should error");
    match err {
        CliError::UnknownObjective { value } => assert_eq!(value, "fastest"),
        other => panic!("expected UnknownObjective, found {other:?}"),
    }
}

#[rstest]
#[case::missing_request(ARG_SOLVE_REQUEST, MissingSource::Request)]
#[case::missing_profile(ARG_SOLVE_PROFILE, MissingSource::Profile)]
fn validate_sources_reports_missing_sources(
    #[case] expected_field: &'static str,
    #[case] missing: MissingSource,
) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");

    let request_path = root.join("request.json");
    let profile_path = root.join("profile.json");

    if !matches!(missing, MissingSource::Request) {
        write_utf8(&request_path, b"{}");
    }
    if !matches!(missing, MissingSource::Profile) {
        write_utf8(&profile_path, b"{}");
    }

    let config = SolveConfig {
        request: request_path,
        profile: Some(profile_path),
        output: None,
        objective: None,
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");

    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");

    let config = SolveConfig {
        request: request_path.clone(),
        profile: None,
        output: None,
        objective: None,
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_request_decodes_json() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");

    let request = sample_request();
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let decoded = load_request(&request_path).expect("request should decode");
    assert_eq!(decoded, request);
}

/// Helper to set up a temporary directory and request path for load_request tests.
fn setup_request_test() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

#[rstest]
fn load_request_rejects_invalid_json() {
    let (_tmp, request_path) = setup_request_test();
    write_utf8(&request_path, b"{ not valid json");

    let err = load_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_request_io_error_returns_open_error() {
    let (_tmp, request_path) = setup_request_test();

    let err = load_request(&request_path).expect_err("missing request should error");
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
    composer.push_cli(json!({ "request": 42 }));

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

    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");

    let env_request = root.join("from-env-request.json");
    let file_profile = root.join("from-file-profile.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "profile": file_profile.as_str(),
            "objective": "time",
        }),
        None,
    );
    composer.push_environment(json!({
        "request": env_request.as_str(),
    }));
    composer.push_cli(json!({
        "objective": "cost",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request, env_request);
    assert_eq!(config.profile, Some(file_profile));
    assert_eq!(config.objective, Some(OptimizationType::Cost));
    assert_eq!(config.output, None);
}

#[cfg(feature = "solver-greedy")]
#[rstest]
fn run_solve_with_prints_route_json() {
    use crate::solve::DefaultSolveSolverBuilder;
    use fleetroute_core::OptimizedRoute;

    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");

    let request = sample_request();
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let args = SolveArgs {
        request: Some(request_path),
        ..SolveArgs::default()
    };

    let mut stdout = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout).expect("solve should succeed");

    let rendered = String::from_utf8(stdout).expect("stdout utf-8");
    let route: OptimizedRoute =
        serde_json::from_str(&rendered).expect("output should be an optimized route");
    let ids: Vec<_> = route
        .optimized_stops
        .iter()
        .map(|stop| stop.stop_id.as_str())
        .collect();
    assert_eq!(ids, ["depot", "east"]);
}

#[cfg(feature = "solver-greedy")]
#[rstest]
fn run_solve_with_writes_output_file() {
    use crate::solve::DefaultSolveSolverBuilder;
    use fleetroute_core::OptimizedRoute;

    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    let output_path = root.join("route.json");

    let request = sample_request();
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let args = SolveArgs {
        request: Some(request_path),
        output: Some(output_path.clone()),
        ..SolveArgs::default()
    };

    let mut stdout = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout).expect("solve should succeed");
    assert!(stdout.is_empty(), "file output should leave stdout untouched");

    let rendered = std::fs::read_to_string(&output_path).expect("read output file");
    let route: OptimizedRoute =
        serde_json::from_str(&rendered).expect("output should be an optimized route");
    assert_eq!(route.optimized_stops.len(), 2);
}

#[cfg(feature = "solver-greedy")]
#[rstest]
fn run_solve_with_creates_missing_output_dirs() {
    use crate::solve::DefaultSolveSolverBuilder;
    use fleetroute_core::OptimizedRoute;

    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    let output_path = root.join("routes/planned/route.json");

    let request = sample_request();
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let args = SolveArgs {
        request: Some(request_path),
        output: Some(output_path.clone()),
        ..SolveArgs::default()
    };

    let mut stdout = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout).expect("solve should succeed");

    let rendered = std::fs::read_to_string(&output_path).expect("read nested output file");
    let route: OptimizedRoute =
        serde_json::from_str(&rendered).expect("output should be an optimized route");
    assert_eq!(route.optimized_stops.len(), 2);
}

#[cfg(feature = "solver-greedy")]
#[rstest]
fn run_solve_with_rejects_invalid_requests() {
    use crate::solve::DefaultSolveSolverBuilder;

    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");

    let mut request = sample_request();
    request.stops.truncate(1);
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let args = SolveArgs {
        request: Some(request_path.clone()),
        ..SolveArgs::default()
    };

    let mut stdout = Vec::new();
    let err = run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout)
        .expect_err("one stop should fail validation");
    match err {
        CliError::InvalidRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}

#[cfg(feature = "solver-greedy")]
#[rstest]
fn objective_override_reorders_the_route() {
    use crate::solve::DefaultSolveSolverBuilder;
    use fleetroute_core::test_support::{identified_stop, pinned_request};
    use fleetroute_core::{OptimizedRoute, Stop};
    use time::macros::time;

    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");

    // Under the distance objective the early-arrival penalty pushes the
    // windowed stop behind the distant one; under cost the scaled base
    // fare makes the distant stop lose instead.
    let request = pinned_request(vec![
        identified_stop("depot", 0.0, 0.0),
        Stop {
            time_window_start: Some(time!(12:00)),
            ..identified_stop("near", 0.0, 0.01)
        },
        identified_stop("far", 0.0, 8.1),
    ]);
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let args = SolveArgs {
        request: Some(request_path),
        objective: Some("cost".to_string()),
        ..SolveArgs::default()
    };

    let mut stdout = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout).expect("solve should succeed");

    let rendered = String::from_utf8(stdout).expect("stdout utf-8");
    let route: OptimizedRoute =
        serde_json::from_str(&rendered).expect("output should be an optimized route");
    let ids: Vec<_> = route
        .optimized_stops
        .iter()
        .map(|stop| stop.stop_id.as_str())
        .collect();
    assert_eq!(ids, ["depot", "near", "far"]);
}
