//! Report rendering.
//!
//! Produces the exportable analysis report (plain text or Markdown) and the
//! scaled bars used for terminal frequency charts. Rendering only reads the
//! [`TextAnalysis`]; it never re-runs the engine.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::{TextAnalysis, WordCount};
use crate::error::ReportResult;
use crate::text;

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "Voice to Text NLP Analysis Report";

/// Output format for exported reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Plain text with indented sections.
    #[default]
    Text,
    /// Markdown with headings and lists.
    Markdown,
}

impl ReportFormat {
    /// Returns the format as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
        }
    }

    /// Conventional file extension for the format.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Output format.
    pub format: ReportFormat,
    /// Date line printed under the title, if any.
    pub generated_on: Option<String>,
    /// How many ranked words to list.
    pub top_words: usize,
    /// Column at which the plain-text transcript is wrapped.
    pub wrap_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            generated_on: None,
            top_words: 10,
            wrap_width: 80,
        }
    }
}

impl ReportOptions {
    /// Options for the given format with everything else defaulted.
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the date line.
    pub fn generated_on(mut self, date: impl Into<String>) -> Self {
        self.generated_on = Some(date.into());
        self
    }

    /// Set how many ranked words to list.
    pub const fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}

/// Write a report for `analysis` to `out`.
///
/// The transcript section is emitted only when `transcript` is present and
/// not blank.
#[tracing::instrument(skip_all, fields(format = %options.format))]
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &TextAnalysis,
    transcript: Option<&str>,
    options: &ReportOptions,
) -> ReportResult<()> {
    let transcript = transcript.filter(|t| !text::is_blank(t));
    match options.format {
        ReportFormat::Text => write_text(out, analysis, transcript, options)?,
        ReportFormat::Markdown => write_markdown(out, analysis, transcript, options)?,
    }
    out.flush()?;
    Ok(())
}

/// Render a report into a string.
pub fn render_report(
    analysis: &TextAnalysis,
    transcript: Option<&str>,
    options: &ReportOptions,
) -> ReportResult<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, analysis, transcript, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn statistics_lines(analysis: &TextAnalysis) -> [(&'static str, usize); 5] {
    let s = &analysis.statistics;
    [
        ("Total Words", s.total_words),
        ("Unique Words", s.unique_words),
        ("Sentences", s.sentences),
        ("Average Words per Sentence", s.average_words_per_sentence),
        ("Average Word Length", s.average_word_length),
    ]
}

fn write_text<W: Write>(
    out: &mut W,
    analysis: &TextAnalysis,
    transcript: Option<&str>,
    options: &ReportOptions,
) -> ReportResult<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    if let Some(ref date) = options.generated_on {
        writeln!(out, "Generated on: {date}")?;
    }

    writeln!(out)?;
    writeln!(out, "Text Statistics:")?;
    for (label, value) in statistics_lines(analysis) {
        writeln!(out, "  {label}: {value}")?;
    }

    writeln!(out)?;
    writeln!(out, "Sentiment Analysis:")?;
    writeln!(
        out,
        "  Overall Sentiment: {}",
        analysis.sentiment.label.as_str().to_uppercase()
    )?;
    writeln!(
        out,
        "  Confidence Score: {}%",
        analysis.sentiment.confidence_percent()
    )?;

    writeln!(out)?;
    writeln!(out, "Top Words:")?;
    let top = analysis.top(options.top_words);
    if top.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, item) in top.iter().enumerate() {
        writeln!(out, "  {}. {}: {}", i + 1, item.word, item.count)?;
    }

    if let Some(text) = transcript {
        writeln!(out)?;
        writeln!(out, "Transcription:")?;
        for line in wrap_words(text, options.wrap_width.saturating_sub(2)) {
            writeln!(out, "  {line}")?;
        }
    }

    Ok(())
}

fn write_markdown<W: Write>(
    out: &mut W,
    analysis: &TextAnalysis,
    transcript: Option<&str>,
    options: &ReportOptions,
) -> ReportResult<()> {
    writeln!(out, "# {REPORT_TITLE}")?;
    if let Some(ref date) = options.generated_on {
        writeln!(out)?;
        writeln!(out, "_Generated on: {date}_")?;
    }

    writeln!(out)?;
    writeln!(out, "## Text Statistics")?;
    writeln!(out)?;
    for (label, value) in statistics_lines(analysis) {
        writeln!(out, "- **{label}:** {value}")?;
    }

    writeln!(out)?;
    writeln!(out, "## Sentiment Analysis")?;
    writeln!(out)?;
    writeln!(
        out,
        "- **Overall Sentiment:** {}",
        analysis.sentiment.label.as_str().to_uppercase()
    )?;
    writeln!(
        out,
        "- **Confidence Score:** {}%",
        analysis.sentiment.confidence_percent()
    )?;

    writeln!(out)?;
    writeln!(out, "## Top Words")?;
    writeln!(out)?;
    let top = analysis.top(options.top_words);
    if top.is_empty() {
        writeln!(out, "_No words found._")?;
    }
    for (i, item) in top.iter().enumerate() {
        writeln!(out, "{}. `{}`: {}", i + 1, item.word, item.count)?;
    }

    if let Some(text) = transcript {
        writeln!(out)?;
        writeln!(out, "## Transcription")?;
        writeln!(out)?;
        for line in text.lines() {
            writeln!(out, "> {line}")?;
        }
    }

    Ok(())
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// One bar of a frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyBar {
    /// The word.
    pub word: String,
    /// Its count.
    pub count: usize,
    /// Filled cells, scaled against the largest count.
    pub filled: usize,
}

/// Scale ranked words into bars at most `width` cells wide.
///
/// The first entry is treated as the maximum, so `top_words` should already
/// be ranked. Any non-zero count gets at least one cell.
pub fn frequency_bars(top_words: &[WordCount], width: usize) -> Vec<FrequencyBar> {
    let max = top_words.first().map_or(0, |w| w.count).max(1);

    top_words
        .iter()
        .map(|item| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (item.count as f64 / max as f64 * width as f64).round() as usize;
            let filled = if item.count > 0 {
                scaled.clamp(1, width.max(1))
            } else {
                0
            };
            FrequencyBar {
                word: item.word.clone(),
                count: item.count,
                filled,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn text_report_sections() {
        let analysis = analyze("I love this great day. Great weather!");
        let report = render_report(
            &analysis,
            Some("I love this great day. Great weather!"),
            &ReportOptions::default().generated_on("2026-10-18"),
        )
        .unwrap();

        assert!(report.starts_with(REPORT_TITLE));
        assert!(report.contains("Generated on: 2026-10-18"));
        assert!(report.contains("  Total Words: 7"));
        assert!(report.contains("  Sentences: 2"));
        assert!(report.contains("Overall Sentiment: POSITIVE"));
        assert!(report.contains("Confidence Score: 100%"));
        assert!(report.contains("  1. great: 2"));
        assert!(report.contains("Transcription:"));
    }

    #[test]
    fn blank_transcript_is_omitted() {
        let analysis = analyze("cat");
        let report = render_report(&analysis, Some("   "), &ReportOptions::default()).unwrap();
        assert!(!report.contains("Transcription"));
        assert!(!report.contains("Generated on"));
    }

    #[test]
    fn empty_analysis_lists_no_words() {
        let report =
            render_report(&TextAnalysis::empty(), None, &ReportOptions::default()).unwrap();
        assert!(report.contains("Top Words:\n  (none)"));
        assert!(report.contains("Overall Sentiment: NEUTRAL"));
        assert!(report.contains("Confidence Score: 0%"));
    }

    #[test]
    fn top_words_respect_option() {
        let analysis = analyze("alpha alpha beta gamma delta");
        let report = render_report(
            &analysis,
            None,
            &ReportOptions::default().with_top_words(2),
        )
        .unwrap();
        assert!(report.contains("2. beta: 1"));
        assert!(!report.contains("3. gamma"));
    }

    #[test]
    fn markdown_report_uses_headings() {
        let analysis = analyze("run run jump");
        let report = render_report(
            &analysis,
            Some("run run jump"),
            &ReportOptions::new(ReportFormat::Markdown),
        )
        .unwrap();
        assert!(report.starts_with("# Voice to Text NLP Analysis Report"));
        assert!(report.contains("## Text Statistics"));
        assert!(report.contains("- **Total Words:** 3"));
        assert!(report.contains("1. `run`: 2"));
        assert!(report.contains("> run run jump"));
    }

    #[test]
    fn wrap_breaks_long_text() {
        let lines = wrap_words("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        let lines = wrap_words("supercalifragilistic short", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "short"]);
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn bars_scale_against_first_entry() {
        let analysis = analyze("run run run run jump jump play");
        let bars = frequency_bars(&analysis.top_words, 20);
        assert_eq!(bars[0].filled, 20);
        assert_eq!(bars[1].filled, 10);
        assert_eq!(bars[2].filled, 5);
    }

    #[test]
    fn bars_keep_a_visible_minimum() {
        let words = vec![
            WordCount {
                word: "big".into(),
                count: 100,
            },
            WordCount {
                word: "tiny".into(),
                count: 1,
            },
        ];
        let bars = frequency_bars(&words, 10);
        assert_eq!(bars[1].filled, 1);
        assert!(frequency_bars(&[], 10).is_empty());
    }

    #[test]
    fn format_extensions() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }
}
