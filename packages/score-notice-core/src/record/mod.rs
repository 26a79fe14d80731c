//! Records and the pasted-text parser that produces them.

mod parser;
#[allow(clippy::module_inception)]
mod record;

pub use parser::{ParseSummary, RecordParser, COLUMN_DELIMITER};
pub use record::{Record, RecordId};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
