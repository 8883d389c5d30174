//! Error types for the cleaning pipeline.

use std::fmt;

use landgrab_model::CleaningStep;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while cleaning a table.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// A column a step needs is absent when the step runs.
    #[error("column '{column}' required by the {step} step is missing")]
    MissingColumn { column: String, step: CleaningStep },

    /// Several required input columns are absent.
    #[error("input is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A rename target already exists in the table.
    #[error("column '{column}' already exists; the {step} step would overwrite it")]
    DuplicateColumn { column: String, step: CleaningStep },

    /// A cell cannot be converted under its column's rule.
    #[error("column '{column}' row {row}: cannot parse {value:?} as {expected}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
        expected: &'static str,
    },

    /// Polars DataFrame operation error.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Coarse classification of [`NormalizationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Column presence problems.
    Schema,
    /// Cell values outside the rule's domain.
    Format,
    /// Failures inside the DataFrame engine.
    Engine,
}

impl NormalizationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NormalizationError::MissingColumn { .. }
            | NormalizationError::MissingColumns { .. }
            | NormalizationError::DuplicateColumn { .. } => ErrorCategory::Schema,
            NormalizationError::InvalidValue { .. } => ErrorCategory::Format,
            NormalizationError::Polars(_) => ErrorCategory::Engine,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Schema => "schema",
            ErrorCategory::Format => "format",
            ErrorCategory::Engine => "engine",
        })
    }
}
