//! Line-oriented interactive session.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use score_notice_core::clipboard::ClipboardSink;
use score_notice_core::record::{Record, RecordId};
use score_notice_core::{Category, NoticeSession};

/// Line that ends a multi-line block (`paste`, `template set`).
const END_OF_BLOCK: &str = ".";

const HELP: &str = "\
Commands:
  category [TAG]           show or select the category (EPT, TOEFL_JR, TOEFL, TO)
  guide                    show the column order for pasting
  paste                    read tab-separated rows until a line with a single '.'
  add field=value; ...     add one record, e.g. add name=Kim; score=77
  list                     list records
  show N                   print the message for record N
  copy N                   copy the message for record N
  delete N                 delete record N
  clear                    delete every record (asks first)
  template [set|reset]     show, replace (until '.') or reset the template
  help                     show this help
  quit                     leave the session";

/// Interactive shell over a [`NoticeSession`].
pub struct Shell<'s, R: BufRead, W: Write> {
    session: NoticeSession,
    input: R,
    output: W,
    sink: &'s mut dyn ClipboardSink,
    assume_yes: bool,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(
        session: NoticeSession,
        input: R,
        output: W,
        sink: &'s mut dyn ClipboardSink,
        assume_yes: bool,
    ) -> Self {
        Self {
            session,
            input,
            output,
            sink,
            assume_yes,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &NoticeSession {
        &self.session
    }

    /// Runs commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Type 'help' for commands.")?;
        loop {
            write!(self.output, "[{}]> ", self.session.selected_category())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit") {
                break;
            }
            // Command errors are shown and the session goes on.
            if let Err(e) = self.execute(line) {
                writeln!(self.output, "error: {:#}", e)?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> Result<()> {
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };

        match command {
            "help" => writeln!(self.output, "{}", HELP)?,
            "category" => self.category(args)?,
            "guide" => {
                let category = self.session.selected_category();
                let guide = self.session.registry().column_guide(category)?;
                writeln!(self.output, "{}", guide)?;
            }
            "paste" => self.paste()?,
            "add" => self.add(args)?,
            "list" => self.list()?,
            "show" => {
                let id = self.record_at(args)?;
                let message = self.session.render(id)?.unwrap_or_default();
                writeln!(self.output, "{}", message)?;
            }
            "copy" => {
                let id = self.record_at(args)?;
                self.session.copy(id, self.sink)?;
                writeln!(self.output, "Copied.")?;
            }
            "delete" => {
                let id = self.record_at(args)?;
                self.session.remove(id);
                writeln!(self.output, "Deleted.")?;
            }
            "clear" => self.clear()?,
            "template" => self.template(args)?,
            other => bail!("unknown command '{}', try 'help'", other),
        }
        Ok(())
    }

    fn category(&mut self, args: &str) -> Result<()> {
        if !args.is_empty() {
            let category: Category = args.parse()?;
            self.session.select_category(category)?;
        }
        writeln!(
            self.output,
            "Category: {}",
            self.session.selected_category().display_name()
        )?;
        Ok(())
    }

    fn paste(&mut self) -> Result<()> {
        let text = self.read_block()?;
        let summary = self.session.import_pasted(&text)?;
        writeln!(
            self.output,
            "Added {} records ({} rows without a name skipped).",
            summary.rows_kept(),
            summary.rows_dropped
        )?;
        Ok(())
    }

    fn add(&mut self, args: &str) -> Result<()> {
        let mut values = Vec::new();
        for pair in args.split(';').filter(|p| !p.trim().is_empty()) {
            let (field, value) = pair
                .split_once('=')
                .with_context(|| format!("expected field=value, got '{}'", pair.trim()))?;
            values.push((field.trim(), value));
        }

        match self.session.add_manual(values)? {
            Some(_) => writeln!(self.output, "Added.")?,
            None => writeln!(self.output, "A name is required.")?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let records = self.session.records();
        writeln!(self.output, "{} records", records.len())?;
        for (i, record) in records.iter().enumerate() {
            writeln!(self.output, "{:>3}. {}", i + 1, summary_line(record))?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let count = self.session.records().len();
        if count == 0 {
            writeln!(self.output, "Nothing to clear.")?;
            return Ok(());
        }
        if !self.assume_yes {
            write!(self.output, "Delete all {} records? [y/N] ", count)?;
            self.output.flush()?;
            let answer = self.read_line()?.unwrap_or_default();
            if !matches!(answer.trim(), "y" | "Y" | "yes") {
                writeln!(self.output, "Cancelled.")?;
                return Ok(());
            }
        }
        let removed = self.session.clear();
        writeln!(self.output, "Deleted {} records.", removed)?;
        Ok(())
    }

    fn template(&mut self, args: &str) -> Result<()> {
        match args {
            "" => {
                let template = self.session.template()?.to_string();
                writeln!(self.output, "{}", template)?;
            }
            "set" => {
                let text = self.read_block()?;
                self.session.set_template(text);
                writeln!(self.output, "Template updated.")?;
            }
            "reset" => {
                self.session.reset_template();
                writeln!(self.output, "Template reset.")?;
            }
            other => bail!("unknown template action '{}'", other),
        }
        Ok(())
    }

    /// Resolves a 1-based list position to a record identifier.
    fn record_at(&self, args: &str) -> Result<RecordId> {
        let position: usize = args
            .parse()
            .with_context(|| format!("expected a record number, got '{}'", args))?;
        position
            .checked_sub(1)
            .and_then(|index| self.session.records().get_index(index))
            .map(Record::id)
            .with_context(|| format!("no record {}", position))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Reads lines up to a lone `.` or end of input, keeping line breaks.
    fn read_block(&mut self) -> Result<String> {
        let mut block = String::new();
        while let Some(line) = self.read_line()? {
            if line.trim_end_matches(['\r', '\n']) == END_OF_BLOCK {
                break;
            }
            block.push_str(&line);
        }
        Ok(block.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// One-line overview of a record: name, category and remaining fields.
fn summary_line(record: &Record) -> String {
    let details: Vec<&str> = record
        .fields()
        .skip(1)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .collect();
    format!(
        "{} [{}] {}",
        record.name(),
        record.category().display_name(),
        details.join(" · ")
    )
}
