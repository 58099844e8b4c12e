//! Library half of the `bigfib` binary, exposed for integration tests.

pub mod app;
pub mod config;
pub mod errors;
pub mod orchestrator;
pub mod output;
pub mod presenter;
