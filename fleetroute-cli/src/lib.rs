//! Command-line interface for the Fleetroute engine.
//!
//! The `solve` subcommand reads a JSON-encoded request, runs the greedy
//! solver, and emits the scheduled route as pretty-printed JSON on stdout
//! or into a file. Options merge from CLI flags, configuration files, and
//! `FLEETROUTE_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fsio;
mod solve;

pub use error::CliError;
use solve::SolveArgs;

pub(crate) const ARG_SOLVE_REQUEST: &str = "request";
pub(crate) const ARG_SOLVE_PROFILE: &str = "profile";
pub(crate) const ARG_SOLVE_OUTPUT: &str = "output";
pub(crate) const ARG_SOLVE_OBJECTIVE: &str = "objective";
pub(crate) const ENV_SOLVE_REQUEST: &str = "FLEETROUTE_CMDS_SOLVE_REQUEST";

/// Run the Fleetroute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration merging,
/// request loading, or the optimization itself fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fleetroute",
    about = "Single-vehicle route optimization for delivery schedules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a set of stops into a scheduled route.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
