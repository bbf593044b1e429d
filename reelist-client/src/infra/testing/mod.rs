//! In-memory service doubles and fixtures.
//!
//! Compiled into the library so integration tests and demo front-ends can
//! run the stores without a backend.

pub mod fixtures;
pub mod stubs;

pub use stubs::{StubListsService, StubMovieCatalog};

/// Install `env_logger` once per test binary
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
