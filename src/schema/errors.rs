//! Schema error types
//!
//! Error codes:
//! - FIELD_DUPLICATE_NAME
//! - FIELD_MALFORMED_SCHEMA
//! - FIELD_SCHEMA_EXISTS

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// A field with the same name is already described
    DuplicateName,
    /// Schema file could not be read or parsed
    MalformedSchema,
    /// Refusing to overwrite an existing schema file
    FileExists,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::DuplicateName => "FIELD_DUPLICATE_NAME",
            SchemaErrorCode::MalformedSchema => "FIELD_MALFORMED_SCHEMA",
            SchemaErrorCode::FileExists => "FIELD_SCHEMA_EXISTS",
        }
    }

    /// Whether the caller can retry with different input
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SchemaErrorCode::DuplicateName)
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Offending field name, if any
    field: Option<String>,
}

impl SchemaError {
    /// Create a duplicate field name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::DuplicateName,
            message: format!("Field '{}' is already described", name),
            field: Some(name),
        }
    }

    /// Create an error for a malformed schema file
    pub fn malformed_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::MalformedSchema,
            message: format!("Malformed schema file '{}': {}", path.into(), reason.into()),
            field: None,
        }
    }

    /// Create an error for an existing schema file
    pub fn file_exists(path: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::FileExists,
            message: format!("Schema file '{}' already exists", path.into()),
            field: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending field name if applicable
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::DuplicateName.code(), "FIELD_DUPLICATE_NAME");
        assert_eq!(SchemaErrorCode::MalformedSchema.code(), "FIELD_MALFORMED_SCHEMA");
        assert_eq!(SchemaErrorCode::FileExists.code(), "FIELD_SCHEMA_EXISTS");
    }

    #[test]
    fn test_only_duplicate_is_recoverable() {
        assert!(SchemaErrorCode::DuplicateName.is_recoverable());
        assert!(!SchemaErrorCode::MalformedSchema.is_recoverable());
        assert!(!SchemaErrorCode::FileExists.is_recoverable());
    }

    #[test]
    fn test_duplicate_name_carries_field() {
        let err = SchemaError::duplicate_name("age");
        assert_eq!(err.code(), SchemaErrorCode::DuplicateName);
        assert_eq!(err.field(), Some("age"));

        let display = err.to_string();
        assert!(display.starts_with("FIELD_DUPLICATE_NAME"));
        assert!(display.contains("age"));
    }

    #[test]
    fn test_malformed_schema_display() {
        let err = SchemaError::malformed_schema("/tmp/s.json", "Invalid JSON");
        assert!(err.field().is_none());
        assert!(err.message().contains("/tmp/s.json"));
        assert!(err.message().contains("Invalid JSON"));
    }
}
