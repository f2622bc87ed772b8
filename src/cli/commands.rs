//! CLI command implementations
//!
//! Each command is split into a pure function returning its output and a
//! thin wrapper in `run_command` that writes it to stdout.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::schema::{load_schema, save_schema, FieldSchema};
use crate::values::UserFields;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_response, write_text};

/// Parse arguments, load configuration and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            Logger::set_min_severity(config.severity()?);
            let path_str = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", path_str.as_str())]);
            config
        }
        None => Config::default(),
    };

    run_command(cli.command, &config)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command, config: &Config) -> CliResult<()> {
    let name = command_name(&command);
    log_event_with_fields(Event::CommandStart, &[("command", name)]);

    match command {
        Command::Init { schema } => {
            init(&schema)?;
            write_response(json!({ "created": schema.display().to_string() }))?;
        }
        Command::Describe {
            schema,
            level,
            spaces,
        } => {
            let level = level.unwrap_or(config.indent_level);
            let spaces = spaces.unwrap_or(config.spaces_per_level);
            let text = describe(&load_schema(&schema)?, level, spaces)?;
            write_text(&text)?;
        }
        Command::Lookup { schema, name } => {
            write_response(lookup(&load_schema(&schema)?, &name)?)?;
        }
        Command::Check { schema, values } => {
            let schema = load_schema(&schema)?;
            let values = load_values(&values)?;
            write_response(check(&schema, &values)?)?;
        }
    }

    log_event_with_fields(Event::CommandComplete, &[("command", name)]);
    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Init { .. } => "init",
        Command::Describe { .. } => "describe",
        Command::Lookup { .. } => "lookup",
        Command::Check { .. } => "check",
    }
}

/// Create an empty schema file.
pub fn init(path: &Path) -> CliResult<()> {
    save_schema(&FieldSchema::new(), path)?;
    Ok(())
}

/// Render `schema` for people.
pub fn describe(schema: &FieldSchema, level: i32, spaces_per_level: i32) -> CliResult<String> {
    let mut out = String::new();
    schema
        .print(&mut out, level, spaces_per_level)
        .map_err(|_| CliError::io_error("Failed to format schema"))?;
    Ok(out)
}

/// Index and type of the field called `name`.
///
/// The type uses the printed name (`STRING`), matching `describe`.
pub fn lookup(schema: &FieldSchema, name: &str) -> CliResult<Value> {
    let index = schema.index_of(name).ok_or_else(|| CliError::not_found(name))?;
    Ok(json!({
        "index": index,
        "name": schema.name(index),
        "type": schema.field_type(index).type_name(),
    }))
}

/// Check `values` against `schema`.
pub fn check(schema: &FieldSchema, values: &UserFields) -> CliResult<Value> {
    let count = values.len().to_string();
    match values.check_against(schema) {
        Ok(()) => {
            log_event_with_fields(Event::ValuesChecked, &[("values", count.as_str())]);
            Ok(json!({ "conforms": true, "values": values.len() }))
        }
        Err(e) => {
            log_event_with_fields(
                Event::ValuesRejected,
                &[("values", count.as_str()), ("code", e.code())],
            );
            Err(e.into())
        }
    }
}

/// Read a values file.
pub fn load_values(path: &Path) -> CliResult<UserFields> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read values file: {}", e)))?;
    Ok(serde_json::from_str(&content)?)
}
