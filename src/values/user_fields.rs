//! Sequence of user field values described by a `FieldSchema`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSchema, Printer};

use super::errors::{ValueError, ValueResult};
use super::value::FieldValue;

/// Ordered sequence of typed values.
///
/// A `UserFields` conforms to a schema when it has the same length and
/// each value has the type the schema gives for its index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserFields {
    values: Vec<FieldValue>,
}

impl UserFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` and returns its index.
    pub fn append(&mut self, value: impl Into<FieldValue>) -> usize {
        self.values.push(value.into());
        self.values.len() - 1
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn remove_all(&mut self) {
        self.values.clear();
    }

    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn value(&self, index: usize) -> &FieldValue {
        &self.values[index]
    }

    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldValue> {
        self.values.iter()
    }

    /// Checks that these values conform to `schema`.
    ///
    /// Reports a length mismatch first, then the lowest mismatching index.
    pub fn check_against(&self, schema: &FieldSchema) -> ValueResult<()> {
        if self.values.len() != schema.len() {
            return Err(ValueError::LengthMismatch {
                expected: schema.len(),
                actual: self.values.len(),
            });
        }

        for (index, (value, description)) in self.values.iter().zip(schema.iter()).enumerate() {
            if value.field_type() != description.field_type {
                return Err(ValueError::TypeMismatch {
                    index,
                    name: description.name.clone(),
                    expected: description.field_type,
                    actual: value.field_type(),
                });
            }
        }

        Ok(())
    }

    /// Value of the field `schema` calls `name`.
    pub fn value_by_name<'a>(
        &'a self,
        schema: &FieldSchema,
        name: &str,
    ) -> ValueResult<&'a FieldValue> {
        let index = schema
            .index_of(name)
            .ok_or_else(|| ValueError::UnknownField(name.to_string()))?;

        self.values.get(index).ok_or_else(|| ValueError::MissingValue {
            index,
            name: name.to_string(),
        })
    }

    /// Writes a human-readable rendering, following the same rules as
    /// `FieldSchema::print`.
    pub fn print<W: fmt::Write>(
        &self,
        out: &mut W,
        level: i32,
        spaces_per_level: i32,
    ) -> fmt::Result {
        let mut printer = Printer::new(out, level, spaces_per_level);
        printer.start()?;
        for value in &self.values {
            printer.element(format_args!("{}", value))?;
        }
        printer.end()
    }
}

impl fmt::Display for UserFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0, -1)
    }
}

impl FromIterator<FieldValue> for UserFields {
    fn from_iter<I: IntoIterator<Item = FieldValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a UserFields {
    type Item = &'a FieldValue;
    type IntoIter = std::slice::Iter<'a, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
