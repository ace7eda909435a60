//! Core library for vocalyze.
//!
//! A lexicon-based text analysis engine for speech transcripts and typed
//! text, plus the pieces the `vocalyze` CLI builds on.
//!
//! # Modules
//!
//! - [`analysis`] - The engine: frequency, sentiment, statistics, ranking
//! - [`text`] - Tokenizer and splitting helpers
//! - [`lexicon`] - Stopword and sentiment word sets
//! - [`transcript`] - Running transcript built from utterances
//! - [`report`] - Exportable report and chart rendering
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use vocalyze_core::{SentimentLabel, analyze};
//!
//! let result = analyze("This is great and wonderful, I love it!");
//! assert_eq!(result.sentiment.label, SentimentLabel::Positive);
//! assert_eq!(result.top_words[0].word, "great");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod report;
pub mod text;
pub mod transcript;

pub use analysis::{
    Sentiment, SentimentLabel, Statistics, TextAnalysis, TextAnalyzer, WordCount, WordFrequency,
    analysis_schema, analyze,
};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, ReportError, ReportResult};
pub use report::{ReportFormat, ReportOptions};
pub use transcript::Transcript;
