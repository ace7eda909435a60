//! Error types for vocalyze-core.
//!
//! The analysis engine itself cannot fail; these cover the configuration
//! layer and report output.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The output sink rejected a write.
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias using [`ReportError`].
pub type ReportResult<T> = Result<T, ReportError>;
