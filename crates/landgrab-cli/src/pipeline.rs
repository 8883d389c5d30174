//! Load, clean and write stages used by the CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use landgrab_ingest::read_csv_table;
use landgrab_model::CleaningSchema;
use landgrab_normalization::{CleaningOutcome, clean_table};
use landgrab_output::write_csv_with_index;

/// Load `input` and apply every cleaning step.
pub fn clean_file(input: &Path, schema: &CleaningSchema) -> Result<CleaningOutcome> {
    let span = info_span!("clean_file", input = %input.display());
    let _guard = span.enter();

    let start = Instant::now();
    let (df, headers) =
        read_csv_table(input).with_context(|| format!("load {}", input.display()))?;
    info!(
        rows = df.height(),
        columns = headers.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Loaded input"
    );

    clean_table(df, schema).with_context(|| format!("clean {}", input.display()))
}

/// Write the cleaned table with its positional index.
pub fn write_output(df: &DataFrame, output: &Path) -> Result<()> {
    let span = info_span!("write_output", output = %output.display());
    let _guard = span.enter();
    write_csv_with_index(df, output).with_context(|| format!("write {}", output.display()))
}
