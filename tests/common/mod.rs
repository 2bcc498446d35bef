//! Shared helpers for integration tests.

#[allow(dead_code)]
#[path = "../../src/auth/test_support.rs"]
mod test_support;

pub use test_support::TestKeys;
