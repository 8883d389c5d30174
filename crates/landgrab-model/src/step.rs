use std::fmt;

use serde::{Deserialize, Serialize};

/// A stage of the cleaning pipeline, in the order the stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningStep {
    /// Fix column names that carry a stray embedded space.
    Rename,
    /// Strip `$` and `,` from currency text and parse as float.
    Currency,
    /// Map `Y` / `N` markers to booleans.
    Flag,
    /// Fill missing years with `0` and truncate to integer.
    Year,
    /// Remove the derived inflation-adjusted column.
    DropDerived,
    /// Remove provenance and footnote columns.
    DropIrrelevant,
}

impl CleaningStep {
    /// All steps in execution order.
    pub const ORDERED: [CleaningStep; 6] = [
        CleaningStep::Rename,
        CleaningStep::Currency,
        CleaningStep::Flag,
        CleaningStep::Year,
        CleaningStep::DropDerived,
        CleaningStep::DropIrrelevant,
    ];

    /// Short machine-friendly name, used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            CleaningStep::Rename => "rename",
            CleaningStep::Currency => "currency",
            CleaningStep::Flag => "flag",
            CleaningStep::Year => "year",
            CleaningStep::DropDerived => "drop-derived",
            CleaningStep::DropIrrelevant => "drop-irrelevant",
        }
    }

    /// Human-readable description for reports.
    pub const fn description(self) -> &'static str {
        match self {
            CleaningStep::Rename => "Fix column names with embedded spaces",
            CleaningStep::Currency => "Parse currency text as float",
            CleaningStep::Flag => "Convert Y/N markers to booleans",
            CleaningStep::Year => "Fill missing years with 0, cast to integer",
            CleaningStep::DropDerived => "Drop derived inflation value",
            CleaningStep::DropIrrelevant => "Drop source and notes columns",
        }
    }
}

impl fmt::Display for CleaningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_steps_are_sorted() {
        let mut sorted = CleaningStep::ORDERED;
        sorted.sort();
        assert_eq!(sorted, CleaningStep::ORDERED);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(CleaningStep::DropIrrelevant.to_string(), "drop-irrelevant");
        assert_eq!(CleaningStep::Currency.to_string(), "currency");
    }
}
