//! Field type definitions
//!
//! Supported types:
//! - INT64: 64-bit signed integer
//! - DOUBLE: 64-bit floating point
//! - STRING: UTF-8 string
//! - DATETIMETZ: date-time with a fixed UTC offset
//! - CHAR_ARRAY: raw byte sequence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of a single user field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// Date-time with timezone offset
    #[serde(rename = "datetimetz")]
    DatetimeTz,
    /// Byte sequence
    CharArray,
}

impl FieldType {
    /// All field types in declaration order
    pub const ALL: [FieldType; 5] = [
        FieldType::Int64,
        FieldType::Double,
        FieldType::String,
        FieldType::DatetimeTz,
        FieldType::CharArray,
    ];

    /// Returns the printed name of this type
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int64 => "INT64",
            FieldType::Double => "DOUBLE",
            FieldType::String => "STRING",
            FieldType::DatetimeTz => "DATETIMETZ",
            FieldType::CharArray => "CHAR_ARRAY",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Error returned when a type name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldType(pub String);

impl fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field type '{}'", self.0)
    }
}

impl std::error::Error for UnknownFieldType {}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INT64" => Ok(FieldType::Int64),
            "DOUBLE" => Ok(FieldType::Double),
            "STRING" => Ok(FieldType::String),
            "DATETIMETZ" => Ok(FieldType::DatetimeTz),
            "CHAR_ARRAY" | "CHARARRAY" => Ok(FieldType::CharArray),
            _ => Err(UnknownFieldType(s.to_string())),
        }
    }
}
