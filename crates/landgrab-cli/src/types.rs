use std::path::PathBuf;

use landgrab_model::ColumnRole;
use landgrab_normalization::StepReport;

/// Outcome of one cleaning run, for reporting.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    /// `(rows, columns)` as loaded.
    pub input_shape: (usize, usize),
    /// `(rows, columns)` after cleaning, excluding the written index.
    pub shape: (usize, usize),
    pub steps: Vec<StepReport>,
    /// Cleaned columns in output order, with the rule that produced each.
    pub columns: Vec<(String, ColumnRole)>,
}
