//! Analyze command: the full engine output for one transcript.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, info, instrument};

use vocalyze_core::config::Config;
use vocalyze_core::{SentimentLabel, TextAnalysis, TextAnalyzer};

use super::{InputArgs, load_transcript};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of ranked words to keep (overrides config `top_words`).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Run the analysis and print it, or emit the result as JSON.
#[instrument(name = "cmd_analyze", skip_all, fields(source = %args.input.label()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let limit = args.top.unwrap_or_else(|| config.top_words_limit());
    debug!(limit, "executing analyze command");

    let transcript = load_transcript(&args.input, max_input_bytes)?;
    let analysis = transcript.analyze(&TextAnalyzer::new().with_top_words(limit));
    info!(
        words = analysis.statistics.total_words,
        unique = analysis.statistics.unique_words,
        sentiment = analysis.sentiment.label.as_str(),
        "analysis complete"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&args.input.label(), &analysis);
    }
    Ok(())
}

fn print_analysis(source: &str, analysis: &TextAnalysis) {
    println!("{} {}", "Analysis:".bold(), source.cyan());

    if analysis.is_empty() {
        println!("  {}", "no text to analyze".yellow());
        return;
    }

    let stats = &analysis.statistics;
    println!();
    println!("{}", "Statistics".bold().underline());
    println!("  {}: {}", "Total words".dimmed(), stats.total_words);
    println!("  {}: {}", "Unique words".dimmed(), stats.unique_words);
    println!("  {}: {}", "Sentences".dimmed(), stats.sentences);
    println!(
        "  {}: {}",
        "Avg words/sentence".dimmed(),
        stats.average_words_per_sentence
    );
    println!("  {}: {}", "Avg word length".dimmed(), stats.average_word_length);

    println!();
    println!("{}", "Sentiment".bold().underline());
    println!(
        "  {} (score {:.2}, confidence {}%)",
        label_colored(analysis.sentiment.label),
        analysis.sentiment.score,
        analysis.sentiment.confidence_percent()
    );

    println!();
    println!("{}", "Top words".bold().underline());
    if analysis.top_words.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (i, item) in analysis.top_words.iter().enumerate() {
        println!("  {:>2}. {} {}", i + 1, item.word, item.count.dimmed());
    }
}

/// Sentiment label in its conventional color, honoring `--color` and
/// whether stdout is a terminal.
pub(crate) fn label_colored(label: SentimentLabel) -> String {
    let text = label.as_str();
    match label {
        SentimentLabel::Positive => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        SentimentLabel::Negative => text
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
        SentimentLabel::Neutral => text
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
    }
}
