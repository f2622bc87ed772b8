//! Field schema subsystem
//!
//! A `FieldSchema` is an ordered, append-only registry mapping unique field
//! names to (index, type) pairs. It describes the values held by a
//! `UserFields` container without owning or referencing one.
//!
//! # Design Principles
//!
//! - Insertion order is the canonical index order
//! - Names are unique; duplicates are rejected without side effects
//! - Indices are stable; only `remove_all` removes fields
//! - Equality is order-sensitive

mod errors;
mod field_schema;
mod loader;
mod printer;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use field_schema::{FieldDescription, FieldSchema};
pub use loader::{load_schema, save_schema};
pub use printer::Printer;
pub use types::{FieldType, UnknownFieldType};
