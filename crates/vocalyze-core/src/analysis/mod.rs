//! Text analysis engine.
//!
//! A pure function from text to [`TextAnalysis`], built from four stages that
//! each live in their own module and can be called individually:
//!
//! 1. tokenization ([`crate::text::tokenize`])
//! 2. frequency counting ([`frequency::count_frequency`])
//! 3. sentiment scoring ([`sentiment::score_sentiment`]), over the raw text
//! 4. statistics and ranking ([`statistics::compute_statistics`], [`statistics::top_words`])
//!
//! The engine never fails and keeps no state between calls.

pub mod frequency;
pub mod sentiment;
pub mod statistics;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use frequency::{WordFrequency, count_frequency};
pub use sentiment::{Sentiment, SentimentLabel, score_sentiment};
pub use statistics::{Statistics, WordCount, compute_statistics, top_words};

use crate::text;

/// Number of ranked words kept in a result unless configured otherwise.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Result of analyzing one text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    /// Content word → occurrence count.
    pub word_frequency: WordFrequency,
    /// Lexicon-based sentiment.
    pub sentiment: Sentiment,
    /// Aggregate counts.
    pub statistics: Statistics,
    /// Most frequent content words, highest count first.
    pub top_words: Vec<WordCount>,
}

impl TextAnalysis {
    /// The canonical result for blank input: everything zero, confidence 0.
    pub fn empty() -> Self {
        Self {
            word_frequency: WordFrequency::new(),
            sentiment: Sentiment::empty(),
            statistics: Statistics::default(),
            top_words: Vec::new(),
        }
    }

    /// Whether the result carries no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_frequency.is_empty() && self.statistics.total_words == 0
    }

    /// The first `n` ranked words, for display subsets.
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.top_words[..n.min(self.top_words.len())]
    }
}

/// Configurable entry point for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnalyzer {
    top_words_limit: usize,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Create an analyzer with the default top-word limit.
    pub const fn new() -> Self {
        Self {
            top_words_limit: DEFAULT_TOP_WORDS,
        }
    }

    /// Set how many ranked words a result keeps.
    pub const fn with_top_words(mut self, limit: usize) -> Self {
        self.top_words_limit = limit;
        self
    }

    /// The configured top-word limit.
    pub const fn top_words_limit(&self) -> usize {
        self.top_words_limit
    }

    /// Analyze `text`.
    ///
    /// Blank text short-circuits to [`TextAnalysis::empty`].
    #[tracing::instrument(skip_all, fields(text_len = text.len(), limit = self.top_words_limit))]
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        if text::is_blank(text) {
            tracing::debug!("blank input, returning empty analysis");
            return TextAnalysis::empty();
        }

        let tokens = text::tokenize(text);
        let word_frequency = count_frequency(&tokens);
        let sentiment = score_sentiment(text);
        let statistics = compute_statistics(text, &tokens);
        let top_words = top_words(&word_frequency, self.top_words_limit);

        tracing::debug!(
            tokens = tokens.len(),
            unique = statistics.unique_words,
            sentiment = sentiment.label.as_str(),
            "analysis complete"
        );

        TextAnalysis {
            word_frequency,
            sentiment,
            statistics,
            top_words,
        }
    }

    /// Analyze text that may be absent; `None` is treated as empty text.
    pub fn analyze_optional(&self, text: Option<&str>) -> TextAnalysis {
        self.analyze(text.unwrap_or_default())
    }
}

/// Analyze `text` with the default top-word limit.
pub fn analyze(text: &str) -> TextAnalysis {
    TextAnalyzer::new().analyze(text)
}

/// JSON Schema describing [`TextAnalysis`], for renderers consuming the JSON output.
pub fn analysis_schema() -> schemars::Schema {
    schemars::schema_for!(TextAnalysis)
}
