//! Observability for fieldschema
//!
//! Structured JSON logging and typed lifecycle events.
//!
//! # Usage
//!
//! ```ignore
//! use fieldschema::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::SchemaLoaded, &[("fields", "3")]);
//! ```

mod events;
mod logger;

use std::io::{self, Write};

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields to stderr
///
/// Dropped when the event's severity is below `Logger::min_severity()`.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if Logger::enabled(event.severity()) {
        write_event(&mut io::stderr(), event, fields);
    }
}

fn write_event<W: Write>(writer: &mut W, event: Event, fields: &[(&str, &str)]) {
    Logger::log_to_writer(event.severity(), event.as_str(), fields, writer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_line(event: Event, fields: &[(&str, &str)]) -> serde_json::Value {
        let mut buffer = Vec::new();
        write_event(&mut buffer, event, fields);
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_event_carries_name_and_severity() {
        let line = event_line(Event::SchemaLoaded, &[]);
        assert_eq!(line["event"], "SCHEMA_LOADED");
        assert_eq!(line["severity"], "INFO");

        let line = event_line(Event::ValuesRejected, &[]);
        assert_eq!(line["event"], "VALUES_REJECTED");
        assert_eq!(line["severity"], "WARN");

        let line = event_line(Event::SchemaLoadFailed, &[]);
        assert_eq!(line["severity"], "ERROR");
    }

    #[test]
    fn test_event_fields_are_written() {
        let line = event_line(
            Event::SchemaSaved,
            &[("path", "/tmp/schema.json"), ("fields", "3")],
        );

        assert_eq!(line["event"], "SCHEMA_SAVED");
        assert_eq!(line["path"], "/tmp/schema.json");
        assert_eq!(line["fields"], "3");
        assert_eq!(line.as_object().unwrap().len(), 4);
    }
}
