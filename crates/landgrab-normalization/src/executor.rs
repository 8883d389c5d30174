//! Cleaning pipeline execution.
//!
//! Applies a [`CleaningSchema`] to a loaded DataFrame in place. Steps run in
//! [`CleaningStep::ORDERED`] order and later steps see post-rename names.

use std::time::Instant;

use landgrab_common::any_to_string;
use landgrab_model::{CleaningSchema, CleaningStep};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info, info_span};

use crate::coerce::{parse_currency, parse_flag, parse_year};
use crate::error::NormalizationError;
use crate::types::{CleaningOutcome, StepReport};
use crate::validation::validate_required_columns;

/// Run every cleaning step on `df`.
///
/// The row count never changes; only columns are renamed, retyped or
/// removed. Any failure aborts the run and the partially cleaned frame is
/// discarded.
pub fn clean_table(
    mut df: DataFrame,
    schema: &CleaningSchema,
) -> Result<CleaningOutcome, NormalizationError> {
    let input_shape = df.shape();
    info!(rows = input_shape.0, columns = input_shape.1, "Cleaning table");
    validate_required_columns(&df, schema)?;

    let mut steps = Vec::with_capacity(CleaningStep::ORDERED.len());
    for step in CleaningStep::ORDERED {
        let span = info_span!("clean_step", step = %step);
        let _guard = span.enter();
        let start = Instant::now();
        let columns: Vec<String> = schema
            .columns_for(step)
            .into_iter()
            .map(str::to_string)
            .collect();

        match step {
            CleaningStep::Rename => rename_columns(&mut df, schema)?,
            CleaningStep::Currency => coerce_currency(&mut df, &columns)?,
            CleaningStep::Flag => coerce_flags(&mut df, &columns)?,
            CleaningStep::Year => coerce_years(&mut df, &columns)?,
            CleaningStep::DropDerived | CleaningStep::DropIrrelevant => {
                drop_columns(&mut df, &columns, step)?;
            }
        }

        let elapsed = start.elapsed();
        debug!(
            columns = columns.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Step complete"
        );
        steps.push(StepReport {
            step,
            columns,
            elapsed,
        });
    }

    debug_assert_eq!(df.height(), input_shape.0);
    info!(rows = df.height(), columns = df.width(), "Table cleaned");

    Ok(CleaningOutcome {
        data: df,
        input_shape,
        steps,
    })
}

/// Look up a column a step depends on.
fn require_column<'a>(
    df: &'a DataFrame,
    name: &str,
    step: CleaningStep,
) -> Result<&'a Column, NormalizationError> {
    df.column(name).map_err(|_| NormalizationError::MissingColumn {
        column: name.to_string(),
        step,
    })
}

/// Apply the rename map. Columns not in the map are untouched.
///
/// Refuses to overwrite an existing column with a rename target.
pub fn rename_columns(
    df: &mut DataFrame,
    schema: &CleaningSchema,
) -> Result<(), NormalizationError> {
    for rename in &schema.renames {
        require_column(df, &rename.from, CleaningStep::Rename)?;
        if df.get_column_index(&rename.to).is_some() {
            return Err(NormalizationError::DuplicateColumn {
                column: rename.to.clone(),
                step: CleaningStep::Rename,
            });
        }
        df.rename(&rename.from, rename.to.as_str().into())?;
        debug!(from = %rename.from, to = %rename.to, "Renamed column");
    }
    Ok(())
}

/// Convert each cell of a column with `parse`, failing on the first rejected cell.
fn convert_column<T, F>(
    df: &DataFrame,
    name: &str,
    step: CleaningStep,
    expected: &'static str,
    parse: F,
) -> Result<Vec<T>, NormalizationError>
where
    F: Fn(&str) -> Option<T>,
{
    let column = require_column(df, name, step)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw = any_to_string(column.get(idx)?);
        match parse(&raw) {
            Some(value) => values.push(value),
            None => {
                return Err(NormalizationError::InvalidValue {
                    column: name.to_string(),
                    row: idx,
                    value: raw,
                    expected,
                });
            }
        }
    }
    Ok(values)
}

/// Replace a column with converted values, keeping its position.
fn replace_column(df: &mut DataFrame, series: Series) -> Result<(), NormalizationError> {
    df.with_column(series.into_column())?;
    Ok(())
}

/// Strip `$` and `,` from each currency column and store it as `Float64`.
pub fn coerce_currency(df: &mut DataFrame, columns: &[String]) -> Result<(), NormalizationError> {
    for name in columns {
        let values = convert_column(
            df,
            name,
            CleaningStep::Currency,
            "a currency amount",
            parse_currency,
        )?;
        replace_column(df, Series::new(name.as_str().into(), values))?;
        debug!(column = %name, "Coerced currency column");
    }
    Ok(())
}

/// Map `Y` / `N` in each flag column to `Boolean`.
pub fn coerce_flags(df: &mut DataFrame, columns: &[String]) -> Result<(), NormalizationError> {
    for name in columns {
        let values = convert_column(df, name, CleaningStep::Flag, "Y or N", parse_flag)?;
        replace_column(df, Series::new(name.as_str().into(), values))?;
        debug!(column = %name, "Coerced flag column");
    }
    Ok(())
}

/// Fill missing years with `0` and store each year column as `Int64`.
pub fn coerce_years(df: &mut DataFrame, columns: &[String]) -> Result<(), NormalizationError> {
    for name in columns {
        let values = convert_column(df, name, CleaningStep::Year, "a year", parse_year)?;
        let filled = values.iter().filter(|year| **year == 0).count();
        replace_column(df, Series::new(name.as_str().into(), values))?;
        debug!(column = %name, zero_years = filled, "Coerced year column");
    }
    Ok(())
}

/// Remove columns, failing if any of them is absent.
///
/// Presence is checked for every column before anything is removed.
pub fn drop_columns(
    df: &mut DataFrame,
    columns: &[String],
    step: CleaningStep,
) -> Result<(), NormalizationError> {
    for name in columns {
        require_column(df, name, step)?;
    }
    for name in columns {
        df.drop_in_place(name)?;
    }
    debug!(dropped = columns.len(), "Dropped columns");
    Ok(())
}
