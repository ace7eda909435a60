//! Summary statistics and top-word ranking.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

use super::frequency::WordFrequency;

/// Aggregate counts over a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Whitespace-delimited pieces in the raw text, punctuation and stopwords included.
    pub total_words: usize,
    /// Distinct content words after stopword filtering.
    pub unique_words: usize,
    /// Non-blank segments between runs of `.`, `!` and `?`.
    pub sentences: usize,
    /// `total_words / sentences`, rounded.
    pub average_words_per_sentence: usize,
    /// Mean length of the content words, rounded.
    pub average_word_length: usize,
}

/// A ranked word and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Compute statistics from the raw text and its filtered tokens.
#[tracing::instrument(skip_all, fields(text_len = text.len(), tokens = tokens.len()))]
pub fn compute_statistics<S: AsRef<str>>(text: &str, tokens: &[S]) -> Statistics {
    let sentences = text::split_sentences(text).len();
    let total_words = text::count_words(text);
    let unique_words = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<HashSet<&str>>()
        .len();

    let average_words_per_sentence = if sentences > 0 {
        rounded_ratio(total_words, sentences)
    } else {
        0
    };

    let average_word_length = if tokens.is_empty() {
        0
    } else {
        let letters: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();
        rounded_ratio(letters, tokens.len())
    };

    Statistics {
        total_words,
        unique_words,
        sentences,
        average_words_per_sentence,
        average_word_length,
    }
}

/// Rank words by count, highest first, keeping at most `limit` entries.
///
/// The sort is stable: words with equal counts keep the mapping's
/// first-occurrence order.
pub fn top_words(freq: &WordFrequency, limit: usize) -> Vec<WordCount> {
    let mut ranked: Vec<WordCount> = freq
        .iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// `numerator / denominator` rounded half away from zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded_ratio(numerator: usize, denominator: usize) -> usize {
    (numerator as f64 / denominator as f64).round() as usize
}
