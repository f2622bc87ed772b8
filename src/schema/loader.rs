//! Schema files
//!
//! A schema file is a JSON array of `{ "name": ..., "type": ... }` objects
//! in index order. Loading rebuilds the schema through
//! `append_field_description`, so duplicate names are rejected.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{SchemaError, SchemaResult};
use super::field_schema::{FieldDescription, FieldSchema};

/// Loads a schema from the JSON file at `path`.
pub fn load_schema(path: &Path) -> SchemaResult<FieldSchema> {
    let path_str = path.display().to_string();

    let result = read_schema(path);
    match &result {
        Ok(schema) => {
            let fields = schema.len().to_string();
            log_event_with_fields(
                Event::SchemaLoaded,
                &[("path", path_str.as_str()), ("fields", fields.as_str())],
            );
        }
        Err(e) => {
            log_event_with_fields(
                Event::SchemaLoadFailed,
                &[("path", path_str.as_str()), ("code", e.code().code())],
            );
        }
    }
    result
}

fn read_schema(path: &Path) -> SchemaResult<FieldSchema> {
    let content = fs::read_to_string(path).map_err(|e| {
        SchemaError::malformed_schema(
            path.display().to_string(),
            format!("Failed to read file: {}", e),
        )
    })?;

    let descriptions: Vec<FieldDescription> = serde_json::from_str(&content).map_err(|e| {
        SchemaError::malformed_schema(path.display().to_string(), format!("Invalid JSON: {}", e))
    })?;

    FieldSchema::try_from_descriptions(descriptions)
        .map_err(|e| SchemaError::malformed_schema(path.display().to_string(), e.message()))
}

/// Writes `schema` to a new file at `path`.
///
/// Refuses to overwrite an existing file.
pub fn save_schema(schema: &FieldSchema, path: &Path) -> SchemaResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                SchemaError::malformed_schema(
                    parent.display().to_string(),
                    format!("Failed to create directory: {}", e),
                )
            })?;
        }
    }

    let content = serde_json::to_string_pretty(schema).map_err(|e| {
        SchemaError::malformed_schema(
            path.display().to_string(),
            format!("Failed to serialize schema: {}", e),
        )
    })?;

    // create_new makes the existence check and the create a single step
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => SchemaError::file_exists(path.display().to_string()),
            _ => SchemaError::malformed_schema(
                path.display().to_string(),
                format!("Failed to create file: {}", e),
            ),
        })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        SchemaError::malformed_schema(
            path.display().to_string(),
            format!("Failed to write file: {}", e),
        )
    })?;

    let path_str = path.display().to_string();
    let fields = schema.len().to_string();
    log_event_with_fields(
        Event::SchemaSaved,
        &[("path", path_str.as_str()), ("fields", fields.as_str())],
    );

    Ok(())
}
