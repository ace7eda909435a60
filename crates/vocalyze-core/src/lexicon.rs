//! Fixed English lexicons used by the analysis engine.
//!
//! Stopwords filter the content-word stream; the positive and negative sets
//! drive sentiment scoring. All three are built on first use and never change.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words dropped by the tokenizer.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
        "would", "could", "should", "may", "might", "must", "can", "shall", "not", "no", "yes",
        "from", "up", "out", "if", "about", "into", "through", "during", "before", "after",
        "above", "below", "between", "among",
    ]
    .into_iter()
    .collect()
});

/// Words that count towards positive sentiment.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "fantastic",
        "awesome",
        "love",
        "like",
        "enjoy",
        "happy",
        "joy",
        "pleased",
        "satisfied",
        "perfect",
        "beautiful",
        "brilliant",
        "outstanding",
        "remarkable",
        "superb",
        "delighted",
        "thrilled",
        "excited",
        "grateful",
        "thankful",
        "blessed",
        "lucky",
        "successful",
        "winner",
        "victory",
        "triumph",
        "celebrate",
        "proud",
        "confident",
        "optimistic",
        "hope",
    ]
    .into_iter()
    .collect()
});

/// Words that count towards negative sentiment.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad",
        "terrible",
        "awful",
        "horrible",
        "hate",
        "dislike",
        "angry",
        "sad",
        "disappointed",
        "upset",
        "frustrated",
        "annoyed",
        "worried",
        "concerned",
        "problem",
        "issue",
        "trouble",
        "difficulty",
        "wrong",
        "error",
        "mistake",
        "fail",
        "failure",
        "lose",
        "loss",
        "defeat",
        "reject",
        "denial",
        "refuse",
        "impossible",
        "never",
        "nothing",
        "nobody",
        "worthless",
        "useless",
        "hopeless",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Returns `true` if `word` (already lowercased and cleaned) is in the positive lexicon.
pub fn is_positive(word: &str) -> bool {
    POSITIVE_WORDS.contains(word)
}

/// Returns `true` if `word` (already lowercased and cleaned) is in the negative lexicon.
pub fn is_negative(word: &str) -> bool {
    NEGATIVE_WORDS.contains(word)
}
