use crate::record::Record;
use crate::schema::{is_valid_field_name, RecordSchema};

/// Quote-wrapped placeholder token found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Byte offset of the opening quote
    pub start: usize,
    /// Byte offset just past the closing quote
    pub end: usize,
    /// Field name between the braces
    pub field: &'t str,
}

/// Iterator over `"{field}"` tokens of a template, in order.
///
/// The closing quote of one token may open the next one; callers that
/// substitute must skip tokens starting before their last replacement.
#[derive(Debug, Clone)]
pub struct Placeholders<'t> {
    template: &'t str,
    pos: usize,
}

impl<'t> Placeholders<'t> {
    pub fn new(template: &'t str) -> Self {
        Self { template, pos: 0 }
    }
}

impl<'t> Iterator for Placeholders<'t> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.pos + self.template.get(self.pos..)?.find("\"{")?;
            let name_start = start + 2;
            let rest = &self.template[name_start..];

            // A field name never holds a quote, so the scan stops at one.
            let close = rest
                .find(['"', '}'])
                .filter(|&i| rest.as_bytes()[i] == b'}');
            if let Some(close) = close {
                let field = &rest[..close];
                let quote = name_start + close + 1;
                if self.template[quote..].starts_with('"') && is_valid_field_name(field) {
                    self.pos = quote;
                    return Some(Placeholder {
                        start,
                        end: quote + 1,
                        field,
                    });
                }
            }

            self.pos = start + 1;
        }
    }
}

/// Renders records into messages by placeholder substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    /// Substitutes every `"{field}"` token the record has a field for with
    /// the quoted value.
    ///
    /// All occurrences are replaced in a single pass over the template, so a
    /// substituted value is never scanned for further tokens. Tokens naming
    /// a field outside the record's schema stay as literal text.
    pub fn render(template: &str, record: &Record) -> String {
        let mut out = String::with_capacity(template.len());
        let mut last = 0;

        for token in Placeholders::new(template) {
            if token.start < last {
                continue;
            }
            if let Some(value) = record.get(token.field) {
                out.push_str(&template[last..token.start]);
                out.push('"');
                out.push_str(value);
                out.push('"');
                last = token.end;
            }
        }

        out.push_str(&template[last..]);
        out
    }

    /// Distinct field names referenced by a template, in first-use order.
    pub fn placeholders(template: &str) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for token in Placeholders::new(template) {
            if !fields.contains(&token.field) {
                fields.push(token.field);
            }
        }
        fields
    }

    /// Fields referenced by a template that the schema cannot fill.
    pub fn unknown_placeholders<'t>(template: &'t str, schema: &RecordSchema) -> Vec<&'t str> {
        Self::placeholders(template)
            .into_iter()
            .filter(|field| !schema.contains(field))
            .collect()
    }
}
