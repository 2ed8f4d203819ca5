//! Solver seam for route optimization strategies.

use thiserror::Error;

use crate::{OptimizationRequest, OptimizedRoute, ProfileError, RequestError};

/// Errors returned by [`RouteSolver::optimize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// The request failed boundary validation; nothing was computed.
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
    /// The routing profile carries unusable overrides.
    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),
    /// Scoring produced a non-finite value; no partial route is emitted.
    #[error("selection score for stop {stop} is not finite")]
    NonFiniteScore {
        /// Label of the stop whose score broke down.
        stop: String,
    },
}

/// Produce a complete visiting order and schedule for a request.
///
/// Implementations must be deterministic: identical requests yield
/// identical routes, so callers may retry freely. They return either a
/// complete permutation of the input stops or an error, never a partial
/// route. Solvers are `Send + Sync` so one instance can serve
/// concurrent requests.
pub trait RouteSolver: Send + Sync {
    /// Optimize a request into a scheduled route.
    ///
    /// # Errors
    /// [`OptimizeError::InvalidRequest`] when boundary validation
    /// rejects the request, [`OptimizeError::InvalidProfile`] when the
    /// solver's profile is unusable, and
    /// [`OptimizeError::NonFiniteScore`] if scoring breaks down
    /// mid-computation.
    fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizedRoute, OptimizeError>;
}
