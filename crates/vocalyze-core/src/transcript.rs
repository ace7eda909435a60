//! Running transcript assembled from recognizer utterances and user edits.

use serde::{Deserialize, Serialize};

use crate::analysis::{TextAnalysis, TextAnalyzer};
use crate::text;

/// Text accumulated from finalized speech-recognition utterances.
///
/// Each utterance is appended after a single space; the transcript can also be
/// replaced wholesale when the user edits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create an empty transcript.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a finalized utterance. Blank utterances are ignored.
    pub fn push_utterance(&mut self, utterance: &str) {
        let utterance = text::trim(utterance);
        if utterance.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(utterance);
    }

    /// Replace the whole transcript, e.g. after a manual edit.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Discard everything.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The transcript text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the transcript has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        text::is_blank(&self.text)
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        text::count_words(&self.text)
    }

    /// Length in UTF-16 code units, the unit editors and browsers report.
    ///
    /// Characters outside the Basic Multilingual Plane (most emoji) count twice.
    pub fn char_count(&self) -> usize {
        self.text.encode_utf16().count()
    }

    /// Run the analysis engine over the current text.
    pub fn analyze(&self, analyzer: &TextAnalyzer) -> TextAnalysis {
        analyzer.analyze(&self.text)
    }
}

impl From<String> for Transcript {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Transcript {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utterances_join_with_single_space() {
        let mut t = Transcript::new();
        t.push_utterance("hello there");
        t.push_utterance("  general kenobi ");
        assert_eq!(t.as_str(), "hello there general kenobi");
        assert_eq!(t.word_count(), 4);
    }

    #[test]
    fn blank_utterances_are_ignored() {
        let mut t = Transcript::from("start");
        t.push_utterance("   ");
        t.push_utterance("");
        assert_eq!(t.as_str(), "start");
    }

    #[test]
    fn counts_for_blank_transcript() {
        let t = Transcript::from("   ");
        assert!(t.is_blank());
        assert_eq!(t.word_count(), 0);
        assert_eq!(t.char_count(), 3);
    }

    #[test]
    fn char_count_uses_characters() {
        assert_eq!(Transcript::from("café").char_count(), 4);
    }

    #[test]
    fn char_count_uses_utf16_units() {
        assert_eq!(Transcript::from("hi 👋").char_count(), 5);
    }

    #[test]
    fn byte_order_marks_are_blank() {
        let mut t = Transcript::from("\u{FEFF}");
        assert!(t.is_blank());
        assert_eq!(t.word_count(), 0);
        t.push_utterance("\u{FEFF} hello ");
        assert_eq!(t.word_count(), 1);
        let mut fresh = Transcript::new();
        fresh.push_utterance("\u{FEFF}");
        assert_eq!(fresh.as_str(), "");
    }

    #[test]
    fn replace_and_clear() {
        let mut t = Transcript::from("draft");
        t.replace("final text");
        assert_eq!(t.as_str(), "final text");
        t.clear();
        assert!(t.is_blank());
    }

    #[test]
    fn analyze_runs_engine() {
        let mut t = Transcript::new();
        t.push_utterance("I love this");
        t.push_utterance("great great day");
        let result = t.analyze(&TextAnalyzer::new());
        assert_eq!(result.word_frequency.get("great"), Some(2));
        assert_eq!(result.statistics.total_words, 6);
    }

    #[test]
    fn empty_transcript_analyzes_to_empty() {
        let result = Transcript::new().analyze(&TextAnalyzer::new());
        assert_eq!(result, TextAnalysis::empty());
    }
}
