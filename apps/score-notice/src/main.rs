//! Command-line front end for the score notice generator.
//!
//! Reads rows pasted from a spreadsheet, renders one notification message
//! per student and writes the messages to stdout or a file.

mod cli;
mod shell;
mod sink;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use score_notice_core::clipboard::ClipboardSink;
use score_notice_core::config::NoticeConfig;
use score_notice_core::record::Record;
use score_notice_core::template::default_template;
use score_notice_core::{Category, NoticeSession};

use cli::{Cli, Commands, OutputFormat};
use shell::Shell;
use sink::{FileSink, StdoutSink};

/// One rendered record in JSON output.
#[derive(Serialize)]
struct RenderedNotice<'a> {
    #[serde(flatten)]
    record: &'a Record,
    message: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => NoticeConfig::from_file(path)?,
        None => NoticeConfig::default(),
    };
    config.apply_env_overrides()?;

    init_tracing(args.verbose, config.log_level.as_deref());

    match args.command {
        Commands::Render {
            category,
            input,
            template,
            output,
            format,
        } => render(
            &config,
            category,
            input.as_deref(),
            template.as_deref(),
            output.as_deref(),
            format,
        ),
        Commands::Schema { category } => {
            let session = NoticeSession::from_config(&config);
            let categories = match category {
                Some(category) => vec![category],
                None => session.registry().categories(),
            };
            for category in categories {
                let guide = session.registry().column_guide(category)?;
                println!("{:<9} {}", category.display_name(), guide);
            }
            Ok(())
        }
        Commands::Template { category } => {
            println!(
                "{}",
                default_template(category.unwrap_or(config.default_category))
            );
            Ok(())
        }
        Commands::Shell {
            category,
            output,
            yes,
        } => {
            let mut session = NoticeSession::from_config(&config);
            if let Some(category) = category {
                session.select_category(category)?;
            }
            let mut sink = open_sink(output.as_deref(), &config)?;
            let stdin = io::stdin();
            let mut shell = Shell::new(session, stdin.lock(), io::stdout(), sink.as_mut(), yes);
            shell.run()
        }
    }
}

/// Installs the fmt subscriber on stderr.
///
/// `-v` flags win over the configured level; the default is `warn`.
fn init_tracing(verbose: u8, configured: Option<&str>) {
    let level = match verbose {
        0 => configured
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn open_sink(output: Option<&Path>, config: &NoticeConfig) -> Result<Box<dyn ClipboardSink>> {
    let sink: Box<dyn ClipboardSink> = match output {
        Some(path) => Box::new(
            FileSink::append_to(path, config.message_separator.as_str())
                .with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(StdoutSink::stdout(config.message_separator.as_str())),
    };
    Ok(sink)
}

fn render(
    config: &NoticeConfig,
    category: Option<Category>,
    input: Option<&Path>,
    template: Option<&Path>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let template = template
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))
        })
        .transpose()?;

    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let session = load_session(config, category, template, &text)?;

    match format {
        OutputFormat::Text => {
            let mut sink = open_sink(output, config)?;
            write_text(&session, sink.as_mut())?;
        }
        OutputFormat::Json => {
            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(
                    fs::OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)
                        .with_context(|| format!("Failed to open {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };
            write_json(&session, writer)?;
        }
    }

    Ok(())
}

/// Builds a session holding the records parsed from `text`.
///
/// `template` replaces the selected category's template when given.
fn load_session(
    config: &NoticeConfig,
    category: Option<Category>,
    template: Option<String>,
    text: &str,
) -> Result<NoticeSession> {
    let mut session = NoticeSession::from_config(config);
    if let Some(category) = category {
        session.select_category(category)?;
    }
    if let Some(template) = template {
        session.set_template(template);
    }

    let summary = session.import_pasted(text)?;
    tracing::info!(
        "Parsed {} records ({} rows skipped)",
        summary.rows_kept(),
        summary.rows_dropped
    );
    Ok(session)
}

/// Hands every rendered message to the sink, in record order.
fn write_text(session: &NoticeSession, sink: &mut dyn ClipboardSink) -> Result<usize> {
    for record in session.records() {
        session.copy(record.id(), sink)?;
    }
    Ok(session.records().len())
}

/// Writes one JSON object per record: its fields plus the rendered message.
fn write_json<W: Write>(session: &NoticeSession, mut writer: W) -> Result<usize> {
    for record in session.records() {
        let notice = RenderedNotice {
            record,
            message: session.render_record(record)?,
        };
        serde_json::to_writer(&mut writer, &notice)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(session.records().len())
}
