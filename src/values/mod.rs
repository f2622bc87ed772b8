//! User field values
//!
//! A `UserFields` container holds a sequence of `FieldValue`s whose names
//! and types are described by a separate `FieldSchema`.

mod errors;
mod user_fields;
mod value;

pub use errors::{ValueError, ValueResult};
pub use user_fields::UserFields;
pub use value::FieldValue;
