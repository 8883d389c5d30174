//! Up-front column presence check.

use landgrab_model::CleaningSchema;
use polars::prelude::DataFrame;

use crate::error::NormalizationError;

/// Required input columns absent from the table, in first-reference order.
pub fn missing_required_columns(df: &DataFrame, schema: &CleaningSchema) -> Vec<String> {
    schema
        .required_input_columns()
        .into_iter()
        .filter(|column| df.get_column_index(column).is_none())
        .collect()
}

/// Fails with every missing required column at once.
///
/// Column presence is the only input validation the cleaner performs.
pub fn validate_required_columns(
    df: &DataFrame,
    schema: &CleaningSchema,
) -> Result<(), NormalizationError> {
    let missing = missing_required_columns(df, schema);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(NormalizationError::MissingColumns { columns: missing })
    }
}
