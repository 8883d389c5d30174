//! Result types of a cleaning run.

use std::time::Duration;

use landgrab_model::CleaningStep;
use polars::prelude::DataFrame;

/// What one step did.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: CleaningStep,
    /// Columns the step touched, by the name they had when it ran.
    pub columns: Vec<String>,
    pub elapsed: Duration,
}

/// Cleaned table plus a record of every step applied to it.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub data: DataFrame,
    /// `(rows, columns)` of the table before cleaning.
    pub input_shape: (usize, usize),
    pub steps: Vec<StepReport>,
}

impl CleaningOutcome {
    /// `(rows, columns)` of the cleaned table, not counting the written index.
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Report for a given step, if it ran.
    pub fn report_for(&self, step: CleaningStep) -> Option<&StepReport> {
        self.steps.iter().find(|report| report.step == step)
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }
}
