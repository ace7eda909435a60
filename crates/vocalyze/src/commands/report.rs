//! Report command: render the exportable analysis report.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info, instrument};

use vocalyze_core::TextAnalyzer;
use vocalyze_core::config::Config;
use vocalyze_core::report::{ReportFormat, ReportOptions, render_report};

use super::{InputArgs, export_path, load_transcript};

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Report format (overrides config `report_format`).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to FILE, or to
    /// `nlp-analysis-report-<millis>.<ext>` inside a directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Leave the transcription section out.
    #[arg(long)]
    pub no_transcript: bool,

    /// Number of ranked words to list (overrides config `top_words`).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Serialize)]
struct ReportOutput {
    format: ReportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    report: String,
}

/// Analyze the input and render a report to stdout or a file.
#[instrument(name = "cmd_report", skip_all, fields(source = %args.input.label()))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let format = args.format.or(config.report_format).unwrap_or_default();
    let top = args.top.unwrap_or_else(|| config.top_words_limit());
    debug!(%format, top, output = ?args.output, "executing report command");

    let transcript = load_transcript(&args.input, max_input_bytes)?;
    let analysis = transcript.analyze(&TextAnalyzer::new().with_top_words(top));

    let options = ReportOptions::new(format)
        .generated_on(chrono::Local::now().format("%Y-%m-%d").to_string())
        .with_top_words(top);
    let body = (!args.no_transcript).then_some(transcript.as_str());
    let report = render_report(&analysis, body, &options).context("failed to render report")?;

    let saved = match args.output {
        Some(ref target) => {
            let path = export_path(target, "nlp-analysis-report", format.extension());
            std::fs::write(path.as_std_path(), &report)
                .with_context(|| format!("failed to write {path}"))?;
            info!(path = %path, "report saved");
            Some(path)
        }
        None => None,
    };

    if global_json {
        let output = ReportOutput {
            format,
            output: saved.as_ref().map(ToString::to_string),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let Some(path) = saved {
        println!("{}: {}", "Report saved".green(), path.cyan());
    } else {
        print!("{report}");
    }
    Ok(())
}
