//! Schema command: JSON Schema of the `analyze --json` output.

use clap::Args;
use tracing::instrument;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the analysis result schema.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    let schema = vocalyze_core::analysis_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
