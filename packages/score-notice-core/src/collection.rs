//! Ordered collection of records held by a session.

use crate::record::{Record, RecordId};

/// Ordered, mutable list of records.
///
/// Insertion order is preserved; append and removal never reorder the
/// records they do not touch.
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends records to the end, keeping their relative order.
    ///
    /// # Returns
    /// Number of records added.
    pub fn append<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        let before = self.records.len();
        self.records.extend(records);
        let added = self.records.len() - before;
        tracing::debug!("Appended {} records ({} total)", added, self.records.len());
        added
    }

    /// Appends a single record.
    pub fn push(&mut self, record: Record) {
        self.append(std::iter::once(record));
    }

    /// Removes the record with the given identifier.
    ///
    /// # Returns
    /// `true` if a record was removed, `false` if none matched.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                tracing::debug!("Removed record {}", id);
                true
            }
            None => false,
        }
    }

    /// Removes all records. Callers confirm with the user first.
    ///
    /// # Returns
    /// Number of records removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        tracing::debug!("Cleared {} records", removed);
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Record at a display position (0-based).
    pub fn get_index(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
