//! Shape report and optional step summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

/// The one-line report printed after a successful run.
pub fn shape_line(shape: (usize, usize)) -> String {
    format!("Final dataframe shape: ({}, {})", shape.0, shape.1)
}

/// Table listing every step and the columns it touched.
pub fn summary_table(result: &CleanResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Description"),
        header_cell("Columns"),
        header_cell("Names"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for report in &result.steps {
        table.add_row(vec![
            Cell::new(report.step.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(report.step.description()),
            Cell::new(report.columns.len()),
            Cell::new(report.columns.join("\n")),
        ]);
    }
    table
}

/// Table of the cleaned columns and the role each one plays.
pub fn column_table(result: &CleanResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Role")]);
    apply_table_style(&mut table);
    for (name, role) in &result.columns {
        table.add_row(vec![Cell::new(name), Cell::new(role)]);
    }
    table
}

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!(
        "Rows: {} -> {}, columns: {} -> {}",
        result.input_shape.0, result.shape.0, result.input_shape.1, result.shape.1
    );
    println!("{}", summary_table(result));
    println!("{}", column_table(result));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    use landgrab_model::{CleaningStep, ColumnRole};
    use landgrab_normalization::StepReport;

    fn sample_result() -> CleanResult {
        CleanResult {
            input: PathBuf::from("in.csv"),
            output: None,
            input_shape: (2, 4),
            shape: (2, 2),
            steps: vec![
                StepReport {
                    step: CleaningStep::Currency,
                    columns: vec!["US_Paid".to_string()],
                    elapsed: Duration::ZERO,
                },
                StepReport {
                    step: CleaningStep::DropDerived,
                    columns: vec!["Inf_Value_Assign_Yr_2020".to_string()],
                    elapsed: Duration::ZERO,
                },
            ],
            columns: vec![
                ("University".to_string(), ColumnRole::Passthrough),
                ("US_Paid".to_string(), ColumnRole::Currency),
            ],
        }
    }

    /// Render without terminal styling or width negotiation.
    fn render(mut table: Table) -> String {
        table
            .force_no_tty()
            .set_content_arrangement(ContentArrangement::Disabled);
        table.to_string()
    }

    #[test]
    fn shape_line_matches_report_format() {
        assert_eq!(shape_line((5, 21)), "Final dataframe shape: (5, 21)");
    }

    #[test]
    fn summary_lists_each_step() {
        let rendered = render(summary_table(&sample_result()));

        insta::assert_snapshot!(rendered, @r"
        ╭──────────────┬──────────────────────────────┬─────────┬──────────────────────────╮
        │ Step         ┆ Description                  ┆ Columns ┆ Names                    │
        ╞══════════════╪══════════════════════════════╪═════════╪══════════════════════════╡
        │ currency     ┆ Parse currency text as float ┆       1 ┆ US_Paid                  │
        │ drop-derived ┆ Drop derived inflation value ┆       1 ┆ Inf_Value_Assign_Yr_2020 │
        ╰──────────────┴──────────────────────────────┴─────────┴──────────────────────────╯
        ");
    }

    #[test]
    fn column_table_shows_roles() {
        let rendered = render(column_table(&sample_result()));

        insta::assert_snapshot!(rendered, @r"
        ╭────────────┬─────────────╮
        │ Column     ┆ Role        │
        ╞════════════╪═════════════╡
        │ University ┆ passthrough │
        │ US_Paid    ┆ currency    │
        ╰────────────┴─────────────╯
        ");
    }
}
