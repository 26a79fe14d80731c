use crate::category::Category;
use crate::error::NoticeError;
use crate::schema::SchemaRegistry;

use super::record::Record;

/// Column delimiter of spreadsheet copy/paste.
pub const COLUMN_DELIMITER: char = '\t';

/// Counts from a single parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Rows found after trimming the input
    pub rows_seen: usize,
    /// Rows dropped for an empty name
    pub rows_dropped: usize,
}

impl ParseSummary {
    /// Rows that became records.
    pub fn rows_kept(&self) -> usize {
        self.rows_seen - self.rows_dropped
    }
}

/// Parses pasted spreadsheet text into records under a category's schema.
#[derive(Debug, Clone, Copy)]
pub struct RecordParser<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> RecordParser<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Parses raw text into records, in input order.
    ///
    /// Rows are split on `\n` or `\r\n` and columns on tab. Rows without a
    /// name are dropped silently; blank or whitespace-only input yields no
    /// records.
    ///
    /// # Returns
    /// The records, or `Err(NoticeError::UnknownCategory)` if the category
    /// has no schema.
    pub fn parse(&self, text: &str, category: Category) -> Result<Vec<Record>, NoticeError> {
        self.parse_report(text, category).map(|(records, _)| records)
    }

    /// Like [`RecordParser::parse`], also reporting how many rows were dropped.
    pub fn parse_report(
        &self,
        text: &str,
        category: Category,
    ) -> Result<(Vec<Record>, ParseSummary), NoticeError> {
        let schema = self.registry.schema(category)?;
        let mut summary = ParseSummary::default();

        if text.trim().is_empty() {
            return Ok((Vec::new(), summary));
        }

        // Only line breaks are stripped from the ends: a leading tab still
        // marks an empty name column on the first row.
        let text = text.trim_matches(['\r', '\n']);
        let mut records = Vec::new();
        // `lines` splits on '\n' and strips a trailing '\r'.
        for row in text.lines() {
            summary.rows_seen += 1;
            match Record::from_columns(schema, row.split(COLUMN_DELIMITER)) {
                Some(record) => records.push(record),
                None => summary.rows_dropped += 1,
            }
        }

        tracing::debug!(
            "Parsed {} rows for {}: {} kept, {} dropped",
            summary.rows_seen,
            category,
            summary.rows_kept(),
            summary.rows_dropped
        );

        Ok((records, summary))
    }
}
