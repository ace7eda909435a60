//! Lexicon-based sentiment scoring.
//!
//! Counts positive and negative lexicon hits over the raw whitespace-split
//! text. The score is the normalized difference of the two tallies; the
//! confidence is the share of sentiment-bearing pieces amplified five times
//! and capped at 1. Both heuristics are fixed and not statistically calibrated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::{is_negative, is_positive};
use crate::text::{clean_word, whitespace_pieces};

/// Scores strictly above this are positive; strictly below its negation, negative.
pub const NEUTRAL_BAND: f64 = 0.1;

/// Multiplier applied to the sentiment-word ratio before capping.
const CONFIDENCE_SCALE: f64 = 5.0;

/// Confidence reported for non-empty text without any lexicon hits.
pub const NO_SIGNAL_CONFIDENCE: f64 = 0.5;

/// Polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Score above the neutral band.
    Positive,
    /// Score below the neutral band.
    Negative,
    /// Score inside the neutral band, or no signal.
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// Returns the label as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Classify a score in `[-1, 1]`.
    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            Self::Positive
        } else if score < -NEUTRAL_BAND {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of sentiment scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Sentiment {
    /// Normalized polarity in `[-1, 1]`.
    pub score: f64,
    /// Polarity label derived from `score`.
    pub label: SentimentLabel,
    /// Heuristic share of sentiment-bearing text in `[0, 1]`.
    pub confidence: f64,
}

impl Sentiment {
    /// Sentiment for text that had nothing to analyze at all.
    pub const fn empty() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
        }
    }

    /// Sentiment for text that contained no lexicon hits.
    pub const fn no_signal() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: NO_SIGNAL_CONFIDENCE,
        }
    }

    /// Confidence as a whole percentage, for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Score the sentiment of raw text.
///
/// Pieces are split on whitespace runs (including the empty pieces produced by
/// leading or trailing whitespace, which count towards the total) and cleaned
/// of punctuation before lexicon lookup.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score_sentiment(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();

    let mut total = 0usize;
    let mut positive = 0usize;
    let mut negative = 0usize;

    for piece in whitespace_pieces(&lowered) {
        total += 1;
        let word = clean_word(piece);
        if is_positive(&word) {
            positive += 1;
        }
        if is_negative(&word) {
            negative += 1;
        }
    }

    let hits = positive + negative;
    tracing::debug!(positive, negative, total, "sentiment lexicon hits");

    if hits == 0 {
        return Sentiment::no_signal();
    }

    let score = (positive as f64 - negative as f64) / hits as f64;
    let confidence = (hits as f64 / total as f64 * CONFIDENCE_SCALE).min(1.0);

    Sentiment {
        score,
        label: SentimentLabel::from_score(score),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hits_is_neutral_with_half_confidence() {
        let s = score_sentiment("The cat sat on the mat.");
        assert_eq!(s, Sentiment::no_signal());
        assert_eq!(s.confidence, 0.5);
    }

    #[test]
    fn empty_text_takes_no_signal_branch() {
        assert_eq!(score_sentiment(""), Sentiment::no_signal());
    }

    #[test]
    fn all_positive() {
        let s = score_sentiment("This is great and wonderful, I love it!");
        assert_eq!(s.score, 1.0);
        assert_eq!(s.label, SentimentLabel::Positive);
        // 3 hits over 8 pieces, scaled by 5, capped at 1
        assert_eq!(s.confidence, 1.0);
    }

    #[test]
    fn mixed_leans_negative() {
        let s = score_sentiment("It was good but also terrible and sad.");
        assert!((s.score - (-1.0 / 3.0)).abs() < 1e-12);
        assert_eq!(s.label, SentimentLabel::Negative);
    }

    #[test]
    fn balanced_hits_fall_in_neutral_band() {
        let s = score_sentiment("good bad");
        assert_eq!(s.score, 0.0);
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.confidence, 1.0);
    }

    #[test]
    fn confidence_scales_with_hit_ratio() {
        // 1 hit in 20 pieces: 1/20 * 5 = 0.25
        let text = format!("happy {}", ["word"; 19].join(" "));
        let s = score_sentiment(&text);
        assert!((s.confidence - 0.25).abs() < 1e-12);
        assert_eq!(s.label, SentimentLabel::Positive);
    }

    #[test]
    fn edge_whitespace_counts_towards_total() {
        // pieces: "", "happy", followed by 18 words, "" = 21 pieces
        let text = format!(" happy {} ", ["word"; 18].join(" "));
        let s = score_sentiment(&text);
        assert!((s.confidence - 5.0 / 21.0).abs() < 1e-12);
    }

    #[test]
    fn uppercase_and_punctuation_still_match() {
        let s = score_sentiment("TERRIBLE!!! (awful)");
        assert_eq!(s.score, -1.0);
        assert_eq!(s.label, SentimentLabel::Negative);
    }

    #[test]
    fn label_thresholds_are_strict() {
        assert_eq!(SentimentLabel::from_score(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.11), SentimentLabel::Negative);
    }

    #[test]
    fn confidence_percent_rounds() {
        let s = Sentiment {
            score: 1.0,
            label: SentimentLabel::Positive,
            confidence: 0.625,
        };
        assert_eq!(s.confidence_percent(), 63);
        assert_eq!(Sentiment::no_signal().confidence_percent(), 50);
        assert_eq!(Sentiment::empty().confidence_percent(), 0);
    }

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
