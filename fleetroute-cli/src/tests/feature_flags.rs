//! Unit tests covering feature-flag behaviour.

#![cfg(not(feature = "solver-greedy"))]

use super::*;
use crate::solve::{DefaultSolveSolverBuilder, SolveSolverBuilder};
use fleetroute_core::RoutingProfile;
use rstest::rstest;

#[rstest]
fn solving_requires_solver_greedy() {
    let err = DefaultSolveSolverBuilder
        .build(RoutingProfile::default())
        .expect_err("missing feature should error");
    match err {
        CliError::MissingFeature { feature, action } => {
            assert_eq!(feature, "solver-greedy");
            assert_eq!(action, "solving a request");
        }
        other => panic!("expected MissingFeature, found {other:?}"),
    }
}
