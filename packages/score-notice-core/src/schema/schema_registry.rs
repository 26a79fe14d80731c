use std::collections::HashMap;

use crate::category::Category;
use crate::error::NoticeError;

use super::record_schema::RecordSchema;

/// Registry of record schemas.
///
/// Single source of truth for how a category's columns map to named fields,
/// consulted by both the parser and the renderer.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<Category, RecordSchema>,
}

impl SchemaRegistry {
    /// Creates a new empty schema registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Creates a registry holding the built-in schema of every category.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        // Built-in schemas are fixed and valid; a failure here is a bug in the table.
        for schema in super::builtin_schemas::builtin_schemas() {
            if let Err(e) = registry.register(schema) {
                tracing::error!("Failed to register built-in schema: {}", e);
            }
        }
        registry
    }

    /// Registers a schema.
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(NoticeError)` if the schema is invalid or
    /// its category already has one.
    pub fn register(&mut self, schema: RecordSchema) -> Result<(), NoticeError> {
        schema.validate()?;

        if self.schemas.contains_key(&schema.category) {
            return Err(NoticeError::SchemaAlreadyRegistered {
                category: schema.category.to_string(),
            });
        }

        tracing::debug!(
            "Registered schema for {} with {} fields",
            schema.category,
            schema.len()
        );
        self.schemas.insert(schema.category, schema);
        Ok(())
    }

    /// Retrieves the schema of a category.
    pub fn schema(&self, category: Category) -> Result<&RecordSchema, NoticeError> {
        self.schemas
            .get(&category)
            .ok_or_else(|| NoticeError::UnknownCategory {
                tag: category.to_string(),
            })
    }

    /// Ordered field names of a category.
    pub fn fields_for(&self, category: Category) -> Result<Vec<&str>, NoticeError> {
        Ok(self.schema(category)?.field_names().collect())
    }

    /// Checks if a category has a schema.
    pub fn contains(&self, category: Category) -> bool {
        self.schemas.contains_key(&category)
    }

    /// Registered categories, in tag order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.schemas.keys().copied().collect();
        categories.sort();
        categories
    }

    /// Column-order guide for pasting, e.g. `1.Name → 2.Score → 3.Class`.
    pub fn column_guide(&self, category: Category) -> Result<String, NoticeError> {
        let schema = self.schema(category)?;
        Ok(schema
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| format!("{}.{}", i + 1, field.label))
            .collect::<Vec<_>>()
            .join(" → "))
    }
}
