//! Greedy nearest-neighbour solver for Fleetroute.
//!
//! This crate provides [`GreedySolver`], the default implementation of the
//! [`RouteSolver`](fleetroute_core::RouteSolver) trait. It sequences a
//! single-vehicle route by repeatedly committing the cheapest reachable stop,
//! where cost blends the active objective with soft time-window penalties and
//! a priority bias.
//!
//! The heuristic is O(n²), performs no backtracking, and is fully
//! deterministic: equal scores resolve to the earliest stop in request order,
//! and the first stop of the request always anchors the route. Every stop is
//! visited exactly once; a stop whose window cannot be met is scheduled late
//! rather than dropped.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;

pub use solver::{GreedySolver, GreedySolverConfig};
