//! Test helpers for composing solve fixtures on disk.

use camino::Utf8Path;
use fleetroute_core::test_support::{identified_stop, pinned_request};
use fleetroute_core::OptimizationRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A small valid request with two named stops a few kilometres apart.
pub(super) fn sample_request() -> OptimizationRequest {
    pinned_request(vec![
        identified_stop("depot", 52.52, 13.405),
        identified_stop("east", 52.52, 13.53),
    ])
}
