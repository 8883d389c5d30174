use anyhow::Result;
use tracing::info;

use landgrab_cli::pipeline::{clean_file, write_output};
use landgrab_cli::summary::shape_line;
use landgrab_cli::types::CleanResult;
use landgrab_model::CleaningSchema;

use crate::cli::Cli;

/// Clean `cli.input` and, unless this is a dry run, write `cli.output`.
///
/// The shape line is printed once cleaning succeeds and before anything is
/// written, so a failed write still leaves the report on stdout.
pub fn run_clean(cli: &Cli) -> Result<CleanResult> {
    let schema = CleaningSchema::landgrab();
    let outcome = clean_file(&cli.input, &schema)?;
    let shape = outcome.shape();
    println!("{}", shape_line(shape));

    let output = if cli.dry_run {
        info!(output = %cli.output.display(), "Dry run, skipping write");
        None
    } else {
        write_output(&outcome.data, &cli.output)?;
        Some(cli.output.clone())
    };

    let columns = outcome
        .data
        .get_column_names()
        .iter()
        .map(|name| (name.to_string(), schema.role_of(name.as_str())))
        .collect();

    Ok(CleanResult {
        input: cli.input.clone(),
        output,
        input_shape: outcome.input_shape,
        shape,
        steps: outcome.steps,
        columns,
    })
}
