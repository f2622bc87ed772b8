//! Ordered, name-indexed schema of typed fields
//!
//! A `FieldSchema` describes the contents of a `UserFields` container: each
//! index in the schema supplies a unique name and the `FieldType` of the
//! value stored at the same index.
//!
//! # Invariants
//!
//! - `name_to_index` and `entries` always have the same length
//! - `entries[name_to_index[name]].name == name` for every key
//! - Indices never change once assigned; `remove_all` is the only removal

use std::collections::HashMap;
use std::fmt;
use std::mem;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::printer::Printer;
use super::types::FieldType;

/// Name and type of one field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Unique field name
    pub name: String,
    /// Type of the described value
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Append-only registry mapping unique field names to (index, type) pairs.
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    name_to_index: HashMap<String, usize>,
    entries: Vec<FieldDescription>,
}

impl FieldSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty schema with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name_to_index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Builds a schema by appending each description in order.
    ///
    /// Fails on the first duplicate name.
    pub fn try_from_descriptions<I>(descriptions: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = FieldDescription>,
    {
        let iter = descriptions.into_iter();
        let mut schema = Self::with_capacity(iter.size_hint().0);
        for description in iter {
            schema.append_field_description(description.name, description.field_type)?;
        }
        Ok(schema)
    }

    /// Appends a description of a field having `name` and `field_type`.
    ///
    /// Returns the index assigned to the new field, which is always the
    /// previous length. If `name` is already described the schema is left
    /// unchanged and a `FIELD_DUPLICATE_NAME` error is returned.
    pub fn append_field_description(
        &mut self,
        name: impl Into<String>,
        field_type: FieldType,
    ) -> SchemaResult<usize> {
        let name = name.into();
        if self.name_to_index.contains_key(&name) {
            return Err(SchemaError::duplicate_name(name));
        }

        let index = self.entries.len();
        self.name_to_index.insert(name.clone(), index);
        self.entries.push(FieldDescription { name, field_type });

        debug_assert_eq!(self.name_to_index.len(), self.entries.len());
        Ok(index)
    }

    /// Removes every field description.
    pub fn remove_all(&mut self) {
        self.name_to_index.clear();
        self.entries.clear();
    }

    /// Exchanges the contents of `self` and `other` without copying entries.
    pub fn swap(&mut self, other: &mut FieldSchema) {
        mem::swap(&mut self.name_to_index, &mut other.name_to_index);
        mem::swap(&mut self.entries, &mut other.entries);
    }

    /// Number of described fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the field called `name`, if described.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Name of the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn name(&self, index: usize) -> &str {
        &self.entries[index].name
    }

    /// Type of the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn field_type(&self, index: usize) -> FieldType {
        self.entries[index].field_type
    }

    /// Description at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&FieldDescription> {
        self.entries.get(index)
    }

    /// Descriptions in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescription> {
        self.entries.iter()
    }

    /// Writes a human-readable rendering to `out`.
    ///
    /// If `level` is negative the first line is not indented. If
    /// `spaces_per_level` is negative the output is a single line. The
    /// format is for people, not programs, and may change.
    pub fn print<W: fmt::Write>(
        &self,
        out: &mut W,
        level: i32,
        spaces_per_level: i32,
    ) -> fmt::Result {
        let mut printer = Printer::new(out, level, spaces_per_level);
        printer.start()?;
        for entry in &self.entries {
            printer.element(format_args!(
                "[ name = {:?} type = {} ]",
                entry.name, entry.field_type
            ))?;
        }
        printer.end()
    }
}

impl PartialEq for FieldSchema {
    fn eq(&self, other: &Self) -> bool {
        // name_to_index is derived from entries
        self.entries == other.entries
    }
}

impl Eq for FieldSchema {}

impl fmt::Display for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0, -1)
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = &'a FieldDescription;
    type IntoIter = std::slice::Iter<'a, FieldDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for FieldSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<FieldDescription>::deserialize(deserializer)?;
        FieldSchema::try_from_descriptions(entries).map_err(D::Error::custom)
    }
}
