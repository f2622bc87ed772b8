//! UserFields Conformance Tests
//!
//! A values container conforms to a schema when lengths match and every
//! value has the type the schema describes at its index.

use chrono::DateTime;
use fieldschema::schema::{FieldSchema, FieldType};
use fieldschema::values::{FieldValue, UserFields, ValueError};

fn event_schema() -> FieldSchema {
    let mut schema = FieldSchema::new();
    schema.append_field_description("id", FieldType::Int64).unwrap();
    schema.append_field_description("user", FieldType::String).unwrap();
    schema.append_field_description("at", FieldType::DatetimeTz).unwrap();
    schema.append_field_description("latency", FieldType::Double).unwrap();
    schema.append_field_description("payload", FieldType::CharArray).unwrap();
    schema
}

fn event_values() -> UserFields {
    let mut values = UserFields::new();
    values.append(7i64);
    values.append("alice");
    values.append(DateTime::parse_from_rfc3339("2025-01-02T03:04:05-05:00").unwrap());
    values.append(12.5f64);
    values.append(vec![0xdeu8, 0xad]);
    values
}

#[test]
fn test_every_type_conforms() {
    assert!(event_values().check_against(&event_schema()).is_ok());
}

#[test]
fn test_lookup_by_name_uses_schema_index() {
    let schema = event_schema();
    let values = event_values();

    assert_eq!(values.value_by_name(&schema, "latency").unwrap().as_double(), Some(12.5));
    assert_eq!(
        values.value_by_name(&schema, "payload").unwrap().as_bytes(),
        Some(&[0xde, 0xad][..])
    );
}

#[test]
fn test_schema_reordering_breaks_conformance() {
    let mut reordered = FieldSchema::new();
    reordered.append_field_description("user", FieldType::String).unwrap();
    reordered.append_field_description("id", FieldType::Int64).unwrap();
    reordered.append_field_description("at", FieldType::DatetimeTz).unwrap();
    reordered.append_field_description("latency", FieldType::Double).unwrap();
    reordered.append_field_description("payload", FieldType::CharArray).unwrap();

    match event_values().check_against(&reordered) {
        Err(ValueError::TypeMismatch { index, name, .. }) => {
            assert_eq!(index, 0);
            assert_eq!(name, "user");
        }
        other => panic!("expected type mismatch, got {:?}", other),
    }
}

#[test]
fn test_cleared_schema_rejects_values() {
    let mut schema = event_schema();
    schema.remove_all();

    assert_eq!(
        event_values().check_against(&schema),
        Err(ValueError::LengthMismatch { expected: 0, actual: 5 })
    );
    assert!(UserFields::new().check_against(&schema).is_ok());
}

#[test]
fn test_values_json_round_trip() {
    let json = serde_json::to_string(&event_values()).unwrap();
    let back: UserFields = serde_json::from_str(&json).unwrap();

    assert_eq!(back, event_values());
    assert_eq!(back.value(2).field_type(), FieldType::DatetimeTz);
    assert!(matches!(back.value(0), FieldValue::Int64(7)));
}
