use crate::category::Category;
use crate::error::NoticeError;

use super::field::{is_valid_field_name, FieldSpec, NAME_FIELD};

/// Ordered field layout for one category.
///
/// Column *i* of a pasted row maps to field *i*. The first field is always
/// [`NAME_FIELD`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Category this schema belongs to
    pub category: Category,
    /// Fields in column order
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Creates a new schema. Call [`RecordSchema::validate`] before use.
    pub fn new(category: Category, fields: Vec<FieldSpec>) -> Self {
        Self { category, fields }
    }

    /// Number of fields (columns) in the schema.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Position of a field by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Validates that the schema is consistent.
    ///
    /// # Returns
    /// `Ok(())` if valid, `Err(NoticeError::InvalidSchema)` otherwise.
    pub fn validate(&self) -> Result<(), NoticeError> {
        let invalid = |message: String| NoticeError::InvalidSchema {
            category: self.category.to_string(),
            message,
        };

        match self.fields.first() {
            None => return Err(invalid("schema has no fields".to_string())),
            Some(first) if first.name != NAME_FIELD => {
                return Err(invalid(format!(
                    "first field must be '{}', got '{}'",
                    NAME_FIELD, first.name
                )));
            }
            Some(_) => {}
        }

        for (i, field) in self.fields.iter().enumerate() {
            if !is_valid_field_name(&field.name) {
                return Err(invalid(format!("invalid field name '{}'", field.name)));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(invalid(format!("duplicate field '{}'", field.name)));
            }
        }

        Ok(())
    }
}
