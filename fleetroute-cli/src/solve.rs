//! Solve command implementation for the Fleetroute CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fleetroute_core::{
    OptimizationRequest, OptimizationType, OptimizedRoute, RouteSolver, RoutingProfile,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

#[cfg(feature = "solver-greedy")]
use fleetroute_solver_greedy::GreedySolver;

use crate::{
    ARG_SOLVE_OBJECTIVE, ARG_SOLVE_OUTPUT, ARG_SOLVE_PROFILE, ARG_SOLVE_REQUEST, CliError,
    ENV_SOLVE_REQUEST, fsio,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the stops of a JSON-encoded OptimizationRequest into a \
                 scheduled single-vehicle route. The routing profile falls back \
                 to the built-in defaults unless a JSON profile file is \
                 supplied, and the optimized route is printed to stdout unless \
                 an output path is given.",
    about = "Order a set of stops into a scheduled route"
)]
#[ortho_config(prefix = "FLEETROUTE")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing an OptimizationRequest.
    #[arg(long = ARG_SOLVE_REQUEST, value_name = "path")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Path to a JSON routing profile overriding the built-in defaults.
    #[arg(long = ARG_SOLVE_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Write the optimized route to this path instead of stdout.
    #[arg(long = ARG_SOLVE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Override the request's objective (distance, time, or cost).
    #[arg(long = ARG_SOLVE_OBJECTIVE, value_name = "objective")]
    #[serde(default)]
    pub(crate) objective: Option<String>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request: Utf8PathBuf,
    /// Optional path to a JSON routing profile.
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Optional destination for the optimized route; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Optional objective override applied after the request validates.
    pub(crate) objective: Option<OptimizationType>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request, ARG_SOLVE_REQUEST)?;
        if let Some(profile) = &self.profile {
            Self::require_existing(profile, ARG_SOLVE_PROFILE)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fsio::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
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

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request = args.request.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        let objective = args
            .objective
            .map(|value| {
                value
                    .parse::<OptimizationType>()
                    .map_err(|_| CliError::UnknownObjective { value })
            })
            .transpose()?;

        Ok(Self {
            request,
            profile: args.profile,
            output: args.output,
            objective,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, profile: RoutingProfile) -> Result<Box<dyn RouteSolver>, CliError>;
}

pub(super) struct DefaultSolveSolverBuilder;

#[cfg(feature = "solver-greedy")]
impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, profile: RoutingProfile) -> Result<Box<dyn RouteSolver>, CliError> {
        Ok(Box::new(GreedySolver::with_profile(profile)))
    }
}

#[cfg(not(feature = "solver-greedy"))]
impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, _profile: RoutingProfile) -> Result<Box<dyn RouteSolver>, CliError> {
        Err(CliError::MissingFeature {
            feature: "solver-greedy",
            action: "solving a request",
        })
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let route = execute_solve(&config, builder)?;
    if let Some(path) = config.output.as_deref() {
        return write_route_file(path, &route);
    }
    write_route(writer, &route)
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolveSolverBuilder,
) -> Result<OptimizedRoute, CliError> {
    let mut request = load_request(&config.request)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            path: config.request.clone(),
            source,
        })?;
    if let Some(objective) = config.objective {
        request.optimization_type = objective;
    }
    let profile = load_profile(config.profile.as_deref())?;
    let solver = builder.build(profile)?;
    solver
        .optimize(&request)
        .map_err(|source| CliError::Optimize { source })
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`OptimizationRequest`] from disk.
pub(super) fn load_request(path: &Utf8Path) -> Result<OptimizationRequest, CliError> {
    let file = fsio::open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON-encoded [`RoutingProfile`], or the defaults when no path is given.
fn load_profile(source_path: Option<&Utf8Path>) -> Result<RoutingProfile, CliError> {
    let Some(path) = source_path else {
        return Ok(RoutingProfile::default());
    };
    let file = fsio::open_utf8_file(path).map_err(|source| CliError::OpenProfile {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &OptimizedRoute) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_route_file(path: &Utf8Path, route: &OptimizedRoute) -> Result<(), CliError> {
    let mut file = fsio::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_route(&mut file, route)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
