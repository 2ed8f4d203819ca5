//! Error types emitted by the Fleetroute CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use fleetroute_core::{OptimizeError, RequestError};

/// Errors emitted by the Fleetroute CLI.
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
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
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
    /// The objective override is not a recognised objective.
    #[error("unknown objective {value:?} (expected distance, time, or cost)")]
    UnknownObjective { value: String },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The request payload failed validation.
    #[error("request in {path:?} failed validation: {source}")]
    InvalidRequest {
        path: Utf8PathBuf,
        #[source]
        source: RequestError,
    },
    /// Opening the profile file failed.
    #[error("failed to open profile at {path:?}: {source}")]
    OpenProfile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Profile JSON could not be decoded.
    #[error("failed to parse profile JSON at {path:?}: {source}")]
    ParseProfile {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The solver rejected the request.
    #[error("optimization failed: {source}")]
    Optimize {
        #[source]
        source: OptimizeError,
    },
    /// Serialising the route response failed.
    #[error("failed to serialise route response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create route output at {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
