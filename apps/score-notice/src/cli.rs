use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use score_notice_core::Category;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse pasted rows and print a message for every record
    Render {
        /// Category of the pasted rows (EPT, TOEFL_JR, TOEFL, TO)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// File with tab-separated rows (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// File replacing the category's template
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Append messages to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the column order expected when pasting
    Schema {
        /// Only this category (all when omitted)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Print a category's built-in template
    Template {
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Interactive session: paste, add, list, copy, delete, clear
    Shell {
        /// Starting category
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Append copied messages to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Clear without asking for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Messages separated by the configured separator
    Text,
    /// One JSON object per record
    Json,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e| format!("{}", e))
}
