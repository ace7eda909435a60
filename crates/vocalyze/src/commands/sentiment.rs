//! Sentiment command.

use clap::Args;
use tracing::{debug, instrument};

use vocalyze_core::analysis::score_sentiment;

use super::analyze::label_colored;
use super::{InputArgs, load_transcript};

/// Arguments for the `sentiment` subcommand.
#[derive(Args, Debug, Default)]
pub struct SentimentArgs {
    /// Text source.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Score sentiment without computing the rest of the analysis.
#[instrument(name = "cmd_sentiment", skip_all, fields(source = %args.input.label()))]
pub fn cmd_sentiment(
    args: SentimentArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let transcript = load_transcript(&args.input, max_input_bytes)?;
    let sentiment = if transcript.is_blank() {
        vocalyze_core::Sentiment::empty()
    } else {
        score_sentiment(transcript.as_str())
    };
    debug!(
        score = sentiment.score,
        label = sentiment.label.as_str(),
        "sentiment scored"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sentiment)?);
    } else {
        println!(
            "{} (score {:.2}, confidence {}%)",
            label_colored(sentiment.label),
            sentiment.score,
            sentiment.confidence_percent()
        );
    }
    Ok(())
}
