//! Field definition within a record schema.

/// Name of the field every schema starts with.
pub const NAME_FIELD: &str = "name";

/// Field definition within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used as the placeholder key in templates
    pub name: String,
    /// Human label shown in the column-order guide
    pub label: String,
}

impl FieldSpec {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }

    /// Placeholder token this field fills, e.g. `"{score}"` with the quotes.
    pub fn placeholder(&self) -> String {
        format!("\"{{{}}}\"", self.name)
    }
}

/// Returns `true` if `name` can be used as a field name.
///
/// Field names must be non-empty and free of quotes, braces and whitespace,
/// so a placeholder token for one field can never be mistaken for another.
pub(crate) fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c == '"' || c == '{' || c == '}' || c.is_whitespace())
}
