use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::category::Category;
use crate::schema::{RecordSchema, NAME_FIELD};

/// Opaque record identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One reported subject with its field values.
///
/// Holds exactly the fields of its category's schema, in schema order.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: RecordId,
    category: Category,
    #[serde(serialize_with = "serialize_fields")]
    fields: Vec<(String, String)>,
}

/// Writes fields as a JSON-style object, keeping schema order.
fn serialize_fields<S>(fields: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (name, value) in fields {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

impl Record {
    /// Builds a record from positional columns.
    ///
    /// Column *i* fills schema field *i*; columns are trimmed, extra columns
    /// are ignored and missing ones become empty strings. Returns `None`
    /// when the name column is empty after trimming.
    pub fn from_columns<'a, I>(schema: &RecordSchema, columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut columns = columns.into_iter();
        let fields = schema
            .field_names()
            .map(|name| {
                let value = columns.next().map(str::trim).unwrap_or_default();
                (name.to_string(), value.to_string())
            })
            .collect();
        Self::with_fields(schema.category, fields)
    }

    /// Builds a record from named values, as entered field by field.
    ///
    /// Values are trimmed. Names outside the schema are ignored and schema
    /// fields without a value become empty strings. Returns `None` when the
    /// name is empty.
    pub fn from_values<'a, I>(schema: &RecordSchema, values: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut slots: Vec<(String, String)> = schema
            .field_names()
            .map(|name| (name.to_string(), String::new()))
            .collect();

        for (name, value) in values {
            match slots.iter_mut().find(|(field, _)| field == name) {
                Some(slot) => slot.1 = value.trim().to_string(),
                None => tracing::debug!(
                    "Ignoring field '{}' not in {} schema",
                    name,
                    schema.category
                ),
            }
        }

        Self::with_fields(schema.category, slots)
    }

    fn with_fields(category: Category, fields: Vec<(String, String)>) -> Option<Self> {
        let has_name = fields
            .iter()
            .any(|(field, value)| field == NAME_FIELD && !value.is_empty());
        if !has_name {
            return None;
        }
        Some(Self {
            id: RecordId::generate(),
            category,
            fields,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The record's name field.
    pub fn name(&self) -> &str {
        self.get(NAME_FIELD).unwrap_or_default()
    }

    /// Value of a schema field; `None` if the field is not in the schema.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Field/value pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
