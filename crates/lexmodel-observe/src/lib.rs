//! Logging setup shared by the lexmodel binaries.

pub mod tracing_setup;

pub use tracing_setup::{TracingOptions, init_tracing};
