//! CLI module for fieldschema
//!
//! Provides command-line interface for:
//! - init: Create an empty schema file
//! - describe: Print a schema
//! - lookup: Find a field's index and type
//! - check: Validate a values file against a schema

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, describe, init, load_values, lookup, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_text};
