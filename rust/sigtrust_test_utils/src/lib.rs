// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Helpers shared by the integration tests of the workspace crates.

pub mod fixtures;
pub mod graph;
pub mod ocsp;
pub mod policy;

pub use fixtures::OcspFixture;
pub use ocsp::SignedOcspBuilder;

/// Routes `tracing` output through the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
