//! Transcript command: assemble, show and optionally save a transcript.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{InputArgs, export_path, load_transcript};

/// Arguments for the `transcript` subcommand.
#[derive(Args, Debug, Default)]
pub struct TranscriptArgs {
    /// Text source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Save the transcript to FILE, or to `transcription-<millis>.txt` inside
    /// a directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct TranscriptOutput<'a> {
    text: &'a str,
    words: usize,
    characters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
}

/// Print the assembled transcript with its word and character counts.
#[instrument(name = "cmd_transcript", skip_all, fields(source = %args.input.label()))]
pub fn cmd_transcript(
    args: TranscriptArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let transcript = load_transcript(&args.input, max_input_bytes)?;
    debug!(output = ?args.output, "executing transcript command");

    let saved = match args.output {
        Some(ref target) => {
            let path = export_path(target, "transcription", "txt");
            std::fs::write(path.as_std_path(), transcript.as_str())
                .with_context(|| format!("failed to write {path}"))?;
            info!(path = %path, "transcript saved");
            Some(path)
        }
        None => None,
    };

    if global_json {
        let output = TranscriptOutput {
            text: transcript.as_str(),
            words: transcript.word_count(),
            characters: transcript.char_count(),
            output: saved.as_ref().map(ToString::to_string),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{transcript}");
    println!();
    println!(
        "{} words, {} characters",
        transcript.word_count().bold(),
        transcript.char_count().bold()
    );
    if let Some(path) = saved {
        println!("{}: {}", "Saved".dimmed(), path.cyan());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_into_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let args = TranscriptArgs {
            input: InputArgs {
                file: None,
                utterances: vec!["first part".into(), "second part".into()],
            },
            output: Some(dir.clone()),
        };
        cmd_transcript(args, true, None).unwrap();

        let saved: Vec<_> = std::fs::read_dir(dir.as_std_path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(saved.len(), 1);
        let name = saved[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("transcription-") && name.ends_with(".txt"));
        assert_eq!(
            std::fs::read_to_string(&saved[0]).unwrap(),
            "first part second part"
        );
    }
}
