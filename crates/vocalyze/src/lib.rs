//! Library interface for the `vocalyze` CLI.
//!
//! Exposes the argument parser and command implementations, mainly for
//! documentation generation and testing. The entry point is `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! [`command()`] returns the clap `Command` used by `xtask` to generate man
//! pages and shell completions.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output. Call once at startup.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Console log filter (e.g., debug, vocalyze_core=trace)
    VOCALYZE_LOG_PATH      Write JSONL logs to this file
    VOCALYZE_LOG_DIR       Write JSONL logs to vocalyze.jsonl in this directory
    VOCALYZE_TOP_WORDS     Number of ranked words kept per analysis
    VOCALYZE_LOG_LEVEL     Level for file logs (debug, info, warn, error)
";

/// Command-line interface definition for vocalyze.
#[derive(Parser)]
#[command(name = "vocalyze")]
#[command(
    about = "Word frequency, sentiment and statistics for transcripts and typed text",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis: frequency, sentiment, statistics, top words
    Analyze(commands::analyze::AnalyzeArgs),

    /// Score sentiment only
    Sentiment(commands::sentiment::SentimentArgs),

    /// Rank the most frequent content words
    Top(commands::top::TopArgs),

    /// Render the analysis report (text or Markdown)
    Report(commands::report::ReportArgs),

    /// Assemble a transcript from a file and utterances
    Transcript(commands::transcript::TranscriptArgs),

    /// Print the JSON Schema of the analysis result
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
