//! Output generation for the cleaned table.
//!
//! The cleaned table is written as comma-separated text with a leading,
//! unnamed, 0-based positional index column.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{INDEX_HEADER, ensure_parent_dir, write_csv_with_index, write_csv_with_index_to};
