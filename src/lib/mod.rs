//! Shared library modules providing error types, command-line construction, and telemetry initialization.

pub mod cmdline;
pub mod errors;
pub mod listing;
pub mod paths;
pub mod telemetry;
