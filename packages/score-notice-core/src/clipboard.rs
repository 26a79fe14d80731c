//! Clipboard sink seam.

use crate::error::NoticeError;

/// Destination for rendered messages, such as the system clipboard.
///
/// A write is attempted once. Failures are reported to the caller, who
/// decides how to surface them.
pub trait ClipboardSink {
    /// Hands a rendered message to the sink.
    fn write_text(&mut self, text: &str) -> Result<(), NoticeError>;
}

/// Sink that keeps every message in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Messages in write order
    pub messages: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent message, as a clipboard would hold it.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl ClipboardSink for MemorySink {
    fn write_text(&mut self, text: &str) -> Result<(), NoticeError> {
        self.messages.push(text.to_string());
        Ok(())
    }
}
