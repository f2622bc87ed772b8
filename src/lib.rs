//! fieldschema - An ordered, name-indexed schema of typed user fields
//!
//! - `schema`: `FieldSchema`, field types, schema files
//! - `values`: `UserFields` containers checked against a schema
//! - `observability`: structured JSON logging
//! - `cli`: command line interface and configuration

pub mod cli;
pub mod observability;
pub mod schema;
pub mod values;
