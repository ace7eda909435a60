//! Logging setup: human-readable console output on stderr, plus optional
//! JSONL file logs.
//!
//! File logging is enabled by, in order of precedence:
//!
//! 1. `VOCALYZE_LOG_PATH` - exact file path
//! 2. `VOCALYZE_LOG_DIR` - directory, file named `vocalyze.jsonl`
//! 3. `log_dir` from the loaded configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "VOCALYZE_LOG_PATH";
const LOG_DIR_ENV: &str = "VOCALYZE_LOG_DIR";
const LOG_FILE_NAME: &str = "vocalyze.jsonl";

/// Where (and whether) to write file logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
    /// Level filter for the file layer.
    pub file_level: String,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `log_dir`.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>, file_level: &str) -> Self {
        let log_file = non_empty_env(LOG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| non_empty_env(LOG_DIR_ENV).map(|dir| Path::new(&dir).join(LOG_FILE_NAME)))
            .or_else(|| log_dir.map(|dir| dir.join(LOG_FILE_NAME)));
        Self {
            log_file,
            file_level: file_level.to_string(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Console filter from the global flags.
///
/// `-q` wins over `-v`. With neither, `RUST_LOG` applies, else `warn`.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive until
/// the process exits.
pub fn init_observability(
    config: &ObservabilityConfig,
    console_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new(&config.file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_log_dir_gets_default_file_name() {
        // Only meaningful when the env overrides are absent.
        if non_empty_env(LOG_PATH_ENV).is_some() || non_empty_env(LOG_DIR_ENV).is_some() {
            return;
        }
        let config =
            ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/tmp/logs")), "info");
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/tmp/logs/vocalyze.jsonl"))
        );
        assert_eq!(config.file_level, "info");
    }

    #[test]
    fn no_file_without_settings() {
        if non_empty_env(LOG_PATH_ENV).is_some() || non_empty_env(LOG_DIR_ENV).is_some() {
            return;
        }
        let config = ObservabilityConfig::from_env_with_overrides(None, "warn");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(env_filter(true, 3).to_string(), "error");
        assert_eq!(env_filter(false, 2).to_string(), "debug");
        assert_eq!(env_filter(false, 9).to_string(), "trace");
    }

    #[test]
    fn file_writer_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("out.jsonl");
        let (_writer, _guard) = file_writer(&path).unwrap();
        assert!(tmp.path().join("nested").is_dir());
    }
}
