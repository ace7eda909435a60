//! Text processing utilities.
//!
//! Tokenization, whitespace splitting, and sentence splitting shared by the
//! analysis stages. Word characters are ASCII `[A-Za-z0-9_]`; everything
//! else is treated as punctuation. Whitespace is Unicode whitespace plus the
//! byte-order mark (U+FEFF), which files saved with a BOM start with.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::is_stopword;

/// The byte-order mark, treated as whitespace.
const BOM: char = '\u{FEFF}';

/// Any character that is neither a word character nor whitespace.
static NON_WORD_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s\x{FEFF}]").expect("valid regex"));

/// Any character that is not a word character.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex"));

/// Runs of whitespace.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("valid regex"));

/// Runs of sentence terminators.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Whether `c` separates words.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// Strip leading and trailing whitespace, byte-order marks included.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Whether `text` has nothing but whitespace.
pub fn is_blank(text: &str) -> bool {
    trim(text).is_empty()
}

/// Split text into filtered content words.
///
/// Lowercases, replaces punctuation with spaces, splits on whitespace, and
/// drops single-character tokens and stopwords. Order and duplicates are kept.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD_OR_SPACE.replace_all(&lowered, " ");

    WHITESPACE
        .split(&cleaned)
        .filter(|token| token.len() > 1 && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Split on runs of whitespace, keeping the empty pieces produced by
/// leading or trailing whitespace.
pub fn whitespace_pieces(text: &str) -> impl Iterator<Item = &str> {
    WHITESPACE.split(text)
}

/// Count whitespace-delimited, non-empty pieces of raw text.
///
/// Punctuation stays attached and nothing is filtered.
pub fn count_words(text: &str) -> usize {
    whitespace_pieces(text).filter(|w| !w.is_empty()).count()
}

/// Split text into sentences on runs of `.`, `!` and `?`, dropping blank segments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|s| !is_blank(s))
        .collect()
}

/// Strip every non-word character from a single piece of text.
pub fn clean_word(piece: &str) -> Cow<'_, str> {
    NON_WORD.replace_all(piece, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_stopwords_and_short_tokens() {
        assert_eq!(tokenize("The cat sat on the mat."), vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn tokenize_lowercases_before_filtering() {
        assert_eq!(tokenize("THE Cat AND The DOG"), vec!["cat", "dog"]);
    }

    #[test]
    fn tokenize_splits_on_punctuation() {
        assert_eq!(tokenize("well-known don't e-mail"), vec!["well", "known", "don", "mail"]);
    }

    #[test]
    fn tokenize_keeps_duplicates_in_order() {
        assert_eq!(tokenize("run jump run"), vec!["run", "jump", "run"]);
    }

    #[test]
    fn tokenize_strips_non_ascii_letters() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("a I ! ?").is_empty());
    }

    #[test]
    fn whitespace_pieces_keep_edge_empties() {
        let pieces: Vec<_> = whitespace_pieces("  good day ").collect();
        assert_eq!(pieces, vec!["", "good", "day", ""]);
    }

    #[test]
    fn count_words_ignores_empties() {
        assert_eq!(count_words("  Hello,   world!  "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn sentences_split_on_terminator_runs() {
        let sentences = split_sentences("Wait... what?! Yes. ");
        assert_eq!(sentences, vec!["Wait", " what", " Yes"]);
    }

    #[test]
    fn sentences_without_terminator() {
        assert_eq!(split_sentences("no punctuation here").len(), 1);
        assert!(split_sentences("?!.").is_empty());
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\n "));
        assert_eq!(trim("\u{FEFF}hello "), "hello");
        assert_eq!(count_words("\u{FEFF}"), 0);
        assert_eq!(count_words("\u{FEFF}good day"), 2);
        assert!(split_sentences("\u{FEFF}").is_empty());
        assert_eq!(tokenize("\u{FEFF}cat\u{FEFF}dog"), vec!["cat", "dog"]);
    }

    #[test]
    fn clean_word_strips_punctuation() {
        assert_eq!(clean_word("wonderful,"), "wonderful");
        assert_eq!(clean_word("(sad)."), "sad");
        assert_eq!(clean_word("!!"), "");
    }
}
