//! Land-grab data ingestion.
//!
//! Loads the raw delimited dataset into a Polars `DataFrame`. Every column is
//! read as text; typing is left to the cleaning rules so that no value is
//! silently reinterpreted on load.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use landgrab_ingest::read_csv_table;
//!
//! let (df, headers) = read_csv_table(Path::new("landgrabu.csv"))?;
//! println!("{} rows, {} columns", df.height(), headers.len());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, WIDE_TABLE_COLUMNS, read_csv_schema, read_csv_table, validate_dataframe_shape,
};
