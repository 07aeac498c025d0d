//! Library side of the `dml` binary: config loading, file validation and the
//! subcommand implementations.
pub mod commands;
pub mod config;
pub mod util;
