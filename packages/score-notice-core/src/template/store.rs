use std::collections::HashMap;

use crate::category::Category;
use crate::error::NoticeError;

use super::defaults::default_template;

/// Editable message templates, one per category.
///
/// Categories are independent: setting one never touches another.
/// Template text is not validated.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<Category, String>,
}

impl TemplateStore {
    /// Creates a store with no templates.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Creates a store seeded with the built-in template of every category.
    pub fn with_defaults() -> Self {
        let templates = Category::ALL
            .into_iter()
            .map(|category| (category, default_template(category)))
            .collect();
        Self { templates }
    }

    /// Current template of a category.
    pub fn get(&self, category: Category) -> Result<&str, NoticeError> {
        self.templates
            .get(&category)
            .map(String::as_str)
            .ok_or_else(|| NoticeError::UnknownCategory {
                tag: category.to_string(),
            })
    }

    /// Replaces the template of one category.
    pub fn set(&mut self, category: Category, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!("Template for {} set ({} bytes)", category, text.len());
        self.templates.insert(category, text);
    }

    /// Restores the built-in template of a category.
    pub fn reset(&mut self, category: Category) {
        self.set(category, default_template(category));
    }

    /// Returns `true` if the category's template differs from the built-in one.
    pub fn is_customized(&self, category: Category) -> bool {
        self.templates
            .get(&category)
            .is_some_and(|text| *text != default_template(category))
    }
}
