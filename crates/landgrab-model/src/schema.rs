//! Declarative column roles for the cleaning pipeline.
//!
//! A [`CleaningSchema`] holds every column name the pipeline touches, grouped
//! by the rule applied to it. Names after the rename map are "post-rename"
//! names; everything except [`CleaningSchema::renames`] uses them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::step::CleaningStep;

const LANDGRAB_RENAMES: [(&str, &str); 3] = [
    (
        "Adjusted_ Value_Unsold_Acres_1914",
        "Adjusted_Value_Unsold_Acres_1914",
    ),
    ("Adjusted_ Total_Value_1914", "Adjusted_Total_Value_1914"),
    (
        "Notes_ Value_Unsold_Acres_1914",
        "Notes_Value_Unsold_Acres_1914",
    ),
];

const LANDGRAB_CURRENCY: [&str; 7] = [
    "US_Paid",
    "Adjusted_US_Paid",
    "Adjusted_Endow_Raised_1914",
    "Adjusted_Value_Unsold_Acres_1914",
    "Adjusted_Total_Value_1914",
    "Adjusted_Inf_Value_Assign_Yr_2020",
    "Adjusted_Inf_Value_1914_2020",
];

const LANDGRAB_FLAGS: [&str; 3] = ["Uni_Site_Purchase", "Uni_Created", "Bulk_Disposal"];

const LANDGRAB_YEARS: [&str; 4] = [
    "Yr_Uni_Founded",
    "Yr_ST_Accept",
    "Yr_Uni_Assign",
    "Year_Uni_Open",
];

// Reconstructible as Total_Value_1914 / Inf_Factor_Adjust_2020.
const LANDGRAB_DERIVED: [&str; 1] = ["Inf_Value_Assign_Yr_2020"];

const LANDGRAB_IRRELEVANT: [&str; 8] = [
    "Disposal_Notes_Source",
    "Notes_Value_Unsold_Acres_1914",
    "Notes_Sold_Acres_1914",
    "Tot_Acres_Exp_Source",
    "Source_Principal_Acres_Sold_1914",
    "Inflation_Source",
    "Source_Acre_1918",
    "Unsold_Value_Source_1918",
];

/// A single column rename from the stored name to the corrected name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

impl ColumnRename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The rule a (post-rename) column is subject to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Currency,
    Flag,
    Year,
    Derived,
    Irrelevant,
    /// Not referenced by any rule; copied through unchanged.
    Passthrough,
}

impl ColumnRole {
    pub const fn name(self) -> &'static str {
        match self {
            ColumnRole::Currency => "currency",
            ColumnRole::Flag => "flag",
            ColumnRole::Year => "year",
            ColumnRole::Derived => "derived",
            ColumnRole::Irrelevant => "irrelevant",
            ColumnRole::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column-role table consulted once when the pipeline starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSchema {
    /// Renames applied first, keyed by stored (input) name.
    pub renames: Vec<ColumnRename>,
    /// Currency text columns coerced to `Float64`.
    pub currency_columns: Vec<String>,
    /// `Y` / `N` columns coerced to `Boolean`.
    pub flag_columns: Vec<String>,
    /// Year columns coerced to `Int64`, missing as `0`.
    pub year_columns: Vec<String>,
    /// Derived columns dropped because they can be recomputed.
    pub derived_columns: Vec<String>,
    /// Source and footnote columns dropped as out of scope.
    pub irrelevant_columns: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

impl CleaningSchema {
    /// The fixed schema of the Land-Grab Universities dataset.
    pub fn landgrab() -> Self {
        Self {
            renames: LANDGRAB_RENAMES
                .iter()
                .map(|(from, to)| ColumnRename::new(*from, *to))
                .collect(),
            currency_columns: owned(&LANDGRAB_CURRENCY),
            flag_columns: owned(&LANDGRAB_FLAGS),
            year_columns: owned(&LANDGRAB_YEARS),
            derived_columns: owned(&LANDGRAB_DERIVED),
            irrelevant_columns: owned(&LANDGRAB_IRRELEVANT),
        }
    }

    /// Columns a step operates on.
    ///
    /// For [`CleaningStep::Rename`] these are the stored (pre-rename) names;
    /// every other step uses post-rename names.
    pub fn columns_for(&self, step: CleaningStep) -> Vec<&str> {
        match step {
            CleaningStep::Rename => self.renames.iter().map(|r| r.from.as_str()).collect(),
            CleaningStep::Currency => self.currency_columns.iter().map(String::as_str).collect(),
            CleaningStep::Flag => self.flag_columns.iter().map(String::as_str).collect(),
            CleaningStep::Year => self.year_columns.iter().map(String::as_str).collect(),
            CleaningStep::DropDerived => self.derived_columns.iter().map(String::as_str).collect(),
            CleaningStep::DropIrrelevant => {
                self.irrelevant_columns.iter().map(String::as_str).collect()
            }
        }
    }

    /// Maps a post-rename column name back to the name stored in the input file.
    pub fn input_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|rename| rename.to == column)
            .map_or(column, |rename| rename.from.as_str())
    }

    /// Every column the input must carry, as stored names, in first-reference order.
    pub fn required_input_columns(&self) -> Vec<String> {
        let mut required: Vec<String> = Vec::new();
        for step in CleaningStep::ORDERED {
            for column in self.columns_for(step) {
                let stored = if step == CleaningStep::Rename {
                    column
                } else {
                    self.input_name(column)
                };
                if !required.iter().any(|existing| existing == stored) {
                    required.push(stored.to_string());
                }
            }
        }
        required
    }

    /// Role of a post-rename column name.
    ///
    /// Drop roles win over coercion roles, so a column that is renamed and
    /// then dropped reports as dropped.
    pub fn role_of(&self, column: &str) -> ColumnRole {
        let contains = |names: &[String]| names.iter().any(|name| name == column);
        if contains(&self.derived_columns) {
            ColumnRole::Derived
        } else if contains(&self.irrelevant_columns) {
            ColumnRole::Irrelevant
        } else if contains(&self.currency_columns) {
            ColumnRole::Currency
        } else if contains(&self.flag_columns) {
            ColumnRole::Flag
        } else if contains(&self.year_columns) {
            ColumnRole::Year
        } else {
            ColumnRole::Passthrough
        }
    }
}

impl Default for CleaningSchema {
    fn default() -> Self {
        Self::landgrab()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landgrab_role_counts() {
        let schema = CleaningSchema::landgrab();
        assert_eq!(schema.renames.len(), 3);
        assert_eq!(schema.currency_columns.len(), 7);
        assert_eq!(schema.flag_columns.len(), 3);
        assert_eq!(schema.year_columns.len(), 4);
        assert_eq!(schema.derived_columns, vec!["Inf_Value_Assign_Yr_2020"]);
        assert_eq!(schema.irrelevant_columns.len(), 8);
    }

    #[test]
    fn rename_targets_have_no_spaces() {
        let schema = CleaningSchema::landgrab();
        for rename in &schema.renames {
            assert!(rename.from.contains(' '), "{}", rename.from);
            assert!(!rename.to.contains(' '), "{}", rename.to);
        }
    }

    #[test]
    fn input_name_maps_back_through_renames() {
        let schema = CleaningSchema::landgrab();
        assert_eq!(
            schema.input_name("Adjusted_Total_Value_1914"),
            "Adjusted_ Total_Value_1914"
        );
        assert_eq!(schema.input_name("US_Paid"), "US_Paid");
    }

    #[test]
    fn required_columns_use_stored_names_once() {
        let schema = CleaningSchema::landgrab();
        let required = schema.required_input_columns();
        // 3 renames, 5 + 3 + 4 coerced, 1 derived, 7 irrelevant not renamed
        assert_eq!(required.len(), 23);
        assert_eq!(required[0], "Adjusted_ Value_Unsold_Acres_1914");
        assert!(required.contains(&"Notes_ Value_Unsold_Acres_1914".to_string()));
        assert!(!required.contains(&"Notes_Value_Unsold_Acres_1914".to_string()));
        assert!(!required.contains(&"Adjusted_Total_Value_1914".to_string()));
    }

    #[test]
    fn role_of_prefers_drop_roles() {
        let schema = CleaningSchema::landgrab();
        assert_eq!(
            schema.role_of("Notes_Value_Unsold_Acres_1914"),
            ColumnRole::Irrelevant
        );
        assert_eq!(schema.role_of("US_Paid"), ColumnRole::Currency);
        assert_eq!(schema.role_of("Bulk_Disposal"), ColumnRole::Flag);
        assert_eq!(schema.role_of("Year_Uni_Open"), ColumnRole::Year);
        assert_eq!(
            schema.role_of("Inf_Value_Assign_Yr_2020"),
            ColumnRole::Derived
        );
        assert_eq!(schema.role_of("University"), ColumnRole::Passthrough);
        assert_eq!(ColumnRole::Passthrough.to_string(), "passthrough");
    }
}
