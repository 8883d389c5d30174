//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{WIDE_TABLE_COLUMNS, read_csv_schema, read_csv_table, validate_dataframe_shape};
