//! Command implementations.

use std::io::Read;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use tracing::debug;

use vocalyze_core::Transcript;

pub mod analyze;
pub mod info;
pub mod report;
pub mod schema;
pub mod sentiment;
pub mod top;
pub mod transcript;

/// Where the text to analyze comes from.
///
/// The file (or stdin) seeds the transcript; each `--utterance` is then
/// appended in order, the way a recognizer feeds finalized phrases.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Text file to analyze (`-` for stdin). Stdin is read when neither a
    /// file nor an utterance is given.
    pub file: Option<Utf8PathBuf>,

    /// Append an utterance to the transcript (repeatable).
    #[arg(short, long = "utterance", value_name = "TEXT")]
    pub utterances: Vec<String>,
}

impl InputArgs {
    /// Short label for the input, used in headings and logs.
    pub fn label(&self) -> String {
        match self.file {
            Some(ref path) if path.as_str() != "-" => path.to_string(),
            _ if !self.utterances.is_empty() && self.file.is_none() => "utterances".to_string(),
            _ => "stdin".to_string(),
        }
    }

    fn reads_stdin(&self) -> bool {
        match self.file {
            Some(ref path) => path.as_str() == "-",
            None => self.utterances.is_empty(),
        }
    }
}

/// Build the transcript described by `input`, enforcing the size limit.
pub fn load_transcript(input: &InputArgs, max_bytes: Option<usize>) -> anyhow::Result<Transcript> {
    let mut transcript = if input.reads_stdin() {
        Transcript::from(read_stdin(max_bytes)?)
    } else if let Some(ref path) = input.file {
        Transcript::from(read_input_file(path, max_bytes)?)
    } else {
        Transcript::new()
    };

    for utterance in &input.utterances {
        transcript.push_utterance(utterance);
    }

    if let Some(max) = max_bytes
        && transcript.as_str().len() > max
    {
        bail!(
            "input too large: transcript is {} bytes (limit: {max} bytes)",
            transcript.as_str().len()
        );
    }

    debug!(
        source = %input.label(),
        words = transcript.word_count(),
        chars = transcript.char_count(),
        "transcript loaded"
    );
    Ok(transcript)
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Check the size before reading the file into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_bounded(std::io::stdin().lock(), max_bytes, "stdin")
}

/// Read all of `reader` as UTF-8, failing once more than `max_bytes` arrive.
///
/// The size check runs on raw bytes, so a limit that cuts a multibyte
/// character still reports the size rather than an encoding error.
fn read_bounded<R: Read>(
    reader: R,
    max_bytes: Option<usize>,
    source: &str,
) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {source}"))?;
            if buf.len() > max {
                bail!("input too large: {source} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {source}"))?;
        }
    }
    String::from_utf8(buf).with_context(|| format!("{source} is not valid UTF-8"))
}

/// Resolve an export target: a directory gets a timestamped file name inside it.
pub fn export_path(target: &Utf8Path, stem: &str, extension: &str) -> Utf8PathBuf {
    if target.is_dir() {
        let millis = chrono::Utc::now().timestamp_millis();
        target.join(format!("{stem}-{millis}.{extension}"))
    } else {
        target.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utterances_only_skip_stdin() {
        let input = InputArgs {
            file: None,
            utterances: vec!["hello world".into(), "again".into()],
        };
        assert!(!input.reads_stdin());
        let transcript = load_transcript(&input, None).unwrap();
        assert_eq!(transcript.as_str(), "hello world again");
        assert_eq!(input.label(), "utterances");
    }

    #[test]
    fn file_then_utterances() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "from the file\n").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let input = InputArgs {
            file: Some(path.clone()),
            utterances: vec!["and more".into()],
        };
        let transcript = load_transcript(&input, None).unwrap();
        assert_eq!(transcript.as_str(), "from the file\n and more");
        assert_eq!(input.label(), path.as_str());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "x".repeat(64)).unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn oversized_utterances_are_rejected() {
        let input = InputArgs {
            file: None,
            utterances: vec!["a".repeat(20)],
        };
        assert!(load_transcript(&input, Some(5)).is_err());
    }

    #[test]
    fn bounded_read_reports_size_when_limit_splits_a_character() {
        // "é" is two bytes; a 4-byte limit cuts the third "é" in half.
        let err = read_bounded("ééé".as_bytes(), Some(4), "stdin").unwrap_err();
        assert!(err.to_string().contains("input too large"), "{err}");
    }

    #[test]
    fn bounded_read_within_limit() {
        assert_eq!(read_bounded("ééé".as_bytes(), Some(6), "stdin").unwrap(), "ééé");
        assert_eq!(read_bounded("plain".as_bytes(), None, "stdin").unwrap(), "plain");
    }

    #[test]
    fn bounded_read_rejects_invalid_utf8() {
        let err = read_bounded(&[0xff, 0xfe, 0x41][..], None, "stdin").unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_input_file(Utf8Path::new("/no/such/file.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.txt"));
    }

    #[test]
    fn export_path_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let path = export_path(&dir, "nlp-analysis-report", "txt");
        assert_eq!(path.parent(), Some(dir.as_path()));
        let name = path.file_name().unwrap();
        assert!(name.starts_with("nlp-analysis-report-"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn export_path_to_file_is_unchanged() {
        let path = export_path(Utf8Path::new("/tmp/does-not-exist/out.md"), "x", "md");
        assert_eq!(path.as_str(), "/tmp/does-not-exist/out.md");
    }
}
