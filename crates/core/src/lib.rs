//! Shared lake model, storage access and configuration for the lakefeed binaries.
pub mod domain;
pub mod infra;
pub mod ports;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod testing;
