//! User field value errors

use thiserror::Error;

use crate::schema::FieldType;

/// Result type for value operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised when values are checked against a schema
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("Schema describes {expected} fields but {actual} values are present")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Field '{name}' at index {index}: expected {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        name: String,
        expected: FieldType,
        actual: FieldType,
    },

    #[error("Field not described by schema: {0}")]
    UnknownField(String),

    #[error("No value present for field '{name}' at index {index}")]
    MissingValue { index: usize, name: String },
}

impl ValueError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValueError::LengthMismatch { .. } => "FIELD_VALUE_LENGTH_MISMATCH",
            ValueError::TypeMismatch { .. } => "FIELD_VALUE_TYPE_MISMATCH",
            ValueError::UnknownField(_) => "FIELD_VALUE_UNKNOWN_FIELD",
            ValueError::MissingValue { .. } => "FIELD_VALUE_MISSING",
        }
    }
}
