//! Clipboard sinks backed by stdout or a file.

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;

use score_notice_core::clipboard::ClipboardSink;
use score_notice_core::NoticeError;

/// Writes each message to a writer, separating consecutive messages.
pub struct WriterSink<W: Write> {
    writer: W,
    separator: String,
    terminator: &'static str,
    written: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            terminator: "",
            written: 0,
        }
    }

    /// Ends every message with a line break, for writers shared with
    /// other line-oriented output.
    pub fn line_terminated(mut self) -> Self {
        self.terminator = "\n";
        self
    }

    /// Number of messages written so far.
    #[cfg(test)]
    pub fn written(&self) -> usize {
        self.written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_message(&mut self, text: &str) -> io::Result<()> {
        if self.written > 0 {
            self.writer.write_all(self.separator.as_bytes())?;
        }
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(self.terminator.as_bytes())?;
        self.writer.flush()
    }
}

impl<W: Write> ClipboardSink for WriterSink<W> {
    fn write_text(&mut self, text: &str) -> Result<(), NoticeError> {
        self.write_message(text)
            .map_err(|e| NoticeError::ClipboardFailed(e.to_string()))?;
        self.written += 1;
        Ok(())
    }
}

/// Sink printing to standard output.
pub type StdoutSink = WriterSink<Stdout>;

/// Sink appending to a file.
pub type FileSink = WriterSink<File>;

impl StdoutSink {
    pub fn stdout(separator: impl Into<String>) -> Self {
        Self::new(io::stdout(), separator).line_terminated()
    }
}

impl FileSink {
    /// Opens a file for appending; existing content counts as a prior message.
    pub fn append_to(path: &Path, separator: impl Into<String>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let existing = file.metadata()?.len() > 0;
        let mut sink = Self::new(file, separator);
        if existing {
            sink.written = 1;
        }
        Ok(sink)
    }
}
