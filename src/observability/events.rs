//! Observable events
//!
//! Events are explicit and typed. Only the loader, config and CLI layers
//! emit them; in-memory schema operations never log.

use std::fmt;

use super::logger::Severity;

/// Observable events in fieldschema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// CLI command started
    CommandStart,
    /// CLI command finished successfully
    CommandComplete,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Schema files
    /// Schema file loaded
    SchemaLoaded,
    /// Schema file rejected
    SchemaLoadFailed,
    /// Schema file written
    SchemaSaved,

    // Values
    /// User field values conform to a schema
    ValuesChecked,
    /// User field values do not conform to a schema
    ValuesRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CommandStart => "COMMAND_BEGIN",
            Event::CommandComplete => "COMMAND_COMPLETE",

            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::SchemaLoadFailed => "SCHEMA_LOAD_FAILED",
            Event::SchemaSaved => "SCHEMA_SAVED",

            Event::ValuesChecked => "VALUES_CHECKED",
            Event::ValuesRejected => "VALUES_REJECTED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SchemaLoadFailed => Severity::Error,
            Event::ValuesRejected => Severity::Warn,
            Event::CommandStart => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
