//! Single-user notice session.
//!
//! Owns the schema registry, template store and record collection, and
//! tracks which category new input is parsed under.

use crate::category::Category;
use crate::clipboard::ClipboardSink;
use crate::collection::RecordCollection;
use crate::config::NoticeConfig;
use crate::error::NoticeError;
use crate::record::{ParseSummary, Record, RecordId, RecordParser};
use crate::schema::SchemaRegistry;
use crate::template::{Renderer, TemplateStore};

/// Session state for one user.
#[derive(Debug, Clone)]
pub struct NoticeSession {
    registry: SchemaRegistry,
    templates: TemplateStore,
    records: RecordCollection,
    selected: Category,
}

impl Default for NoticeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSession {
    /// Creates a session with built-in schemas and templates.
    pub fn new() -> Self {
        Self::with_parts(
            SchemaRegistry::builtin(),
            TemplateStore::with_defaults(),
            Category::default(),
        )
    }

    /// Creates a session starting on the configured default category.
    pub fn from_config(config: &NoticeConfig) -> Self {
        Self::with_parts(
            SchemaRegistry::builtin(),
            TemplateStore::with_defaults(),
            config.default_category,
        )
    }

    /// Creates a session from explicit parts.
    pub fn with_parts(
        registry: SchemaRegistry,
        templates: TemplateStore,
        selected: Category,
    ) -> Self {
        Self {
            registry,
            templates,
            records: RecordCollection::new(),
            selected,
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn selected_category(&self) -> Category {
        self.selected
    }

    /// Selects the category used for new input and template edits.
    pub fn select_category(&mut self, category: Category) -> Result<(), NoticeError> {
        self.registry.schema(category)?;
        self.selected = category;
        Ok(())
    }

    /// Parses pasted text under the selected category and appends the records.
    pub fn import_pasted(&mut self, text: &str) -> Result<ParseSummary, NoticeError> {
        let (records, summary) =
            RecordParser::new(&self.registry).parse_report(text, self.selected)?;
        self.records.append(records);
        Ok(summary)
    }

    /// Adds one record entered field by field.
    ///
    /// # Returns
    /// The new record's identifier, or `None` if the name was empty.
    pub fn add_manual<'a, I>(&mut self, values: I) -> Result<Option<RecordId>, NoticeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let schema = self.registry.schema(self.selected)?;
        Ok(Record::from_values(schema, values).map(|record| {
            let id = record.id();
            self.records.push(record);
            id
        }))
    }

    /// Removes a record; absent identifiers are ignored.
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.records.remove(id)
    }

    /// Removes every record. The caller obtains confirmation first.
    pub fn clear(&mut self) -> usize {
        self.records.clear()
    }

    /// Current template of the selected category.
    pub fn template(&self) -> Result<&str, NoticeError> {
        self.templates.get(self.selected)
    }

    /// Replaces the selected category's template.
    pub fn set_template(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Ok(schema) = self.registry.schema(self.selected) {
            let unknown = Renderer::unknown_placeholders(&text, schema);
            if !unknown.is_empty() {
                tracing::warn!(
                    "Template for {} references fields outside its schema: {}",
                    self.selected,
                    unknown.join(", ")
                );
            }
        }
        self.templates.set(self.selected, text);
    }

    /// Restores the selected category's built-in template.
    pub fn reset_template(&mut self) {
        self.templates.reset(self.selected);
    }

    /// Renders one record against its own category's template.
    pub fn render_record(&self, record: &Record) -> Result<String, NoticeError> {
        let template = self.templates.get(record.category())?;
        Ok(Renderer::render(template, record))
    }

    /// Renders a record by identifier; `None` if it is not in the session.
    pub fn render(&self, id: RecordId) -> Result<Option<String>, NoticeError> {
        self.records
            .get(id)
            .map(|record| self.render_record(record))
            .transpose()
    }

    /// Renders every record, in collection order.
    pub fn render_all(&self) -> Result<Vec<(RecordId, String)>, NoticeError> {
        self.records
            .iter()
            .map(|record| Ok((record.id(), self.render_record(record)?)))
            .collect()
    }

    /// Renders a record and hands the message to a clipboard sink.
    ///
    /// The write is attempted once. A failure is logged and returned.
    ///
    /// # Returns
    /// `Ok(false)` if no record has the identifier, `Ok(true)` once written.
    pub fn copy(&self, id: RecordId, sink: &mut dyn ClipboardSink) -> Result<bool, NoticeError> {
        let Some(message) = self.render(id)? else {
            return Ok(false);
        };
        match sink.write_text(&message) {
            Ok(()) => {
                tracing::debug!("Copied message for record {}", id);
                Ok(true)
            }
            Err(e) => {
                tracing::error!("Failed to copy message for record {}: {}", id, e);
                Err(e)
            }
        }
    }
}
