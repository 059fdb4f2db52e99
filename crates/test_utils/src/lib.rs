//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims back-office test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `harness`: Wires the in-memory store to every service
//! - `hashing`: Deterministic credential hasher stand-in
//! - `generators`: Property-based test data generators

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod harness;
pub mod hashing;

pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use harness::*;
pub use hashing::*;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
});

/// Initializes the tracing subscriber once per test binary
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Set `RUST_LOG` to see service-level output.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
