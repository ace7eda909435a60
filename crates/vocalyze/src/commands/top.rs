//! Top command: ranked content words with a terminal bar chart.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use vocalyze_core::TextAnalyzer;
use vocalyze_core::config::Config;
use vocalyze_core::report::{FrequencyBar, frequency_bars};

use super::{InputArgs, load_transcript};

/// Widest bar drawn, in cells.
const BAR_WIDTH: usize = 40;

/// Arguments for the `top` subcommand.
#[derive(Args, Debug, Default)]
pub struct TopArgs {
    /// Text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// How many words to show (overrides config `chart_words`).
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print `word count` lines without bars.
    #[arg(long)]
    pub plain: bool,
}

#[derive(Serialize)]
struct TopOutput {
    source: String,
    total_words: usize,
    words: Vec<FrequencyBar>,
}

/// Print the most frequent content words.
#[instrument(name = "cmd_top", skip_all, fields(source = %args.input.label()))]
pub fn cmd_top(
    args: TopArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or_else(|| config.chart_words_limit());
    debug!(limit, plain = args.plain, "executing top command");

    let transcript = load_transcript(&args.input, max_input_bytes)?;
    let analysis = transcript.analyze(&TextAnalyzer::new().with_top_words(limit));
    let bars = frequency_bars(&analysis.top_words, BAR_WIDTH);

    if global_json {
        let output = TopOutput {
            source: args.input.label(),
            total_words: analysis.statistics.total_words,
            words: bars,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if bars.is_empty() {
        println!("{}", "no words found".yellow());
        return Ok(());
    }

    let word_width = bars.iter().map(|b| b.word.chars().count()).max().unwrap_or(0);
    for bar in &bars {
        if args.plain {
            println!("{} {}", bar.word, bar.count);
        } else {
            println!(
                "{:<word_width$} {} {}",
                bar.word,
                "█".repeat(bar.filled).cyan(),
                bar.count.dimmed()
            );
        }
    }
    Ok(())
}
