//! Indexed CSV writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use landgrab_common::any_to_string;
use polars::prelude::DataFrame;

use crate::error::{OutputError, Result};

/// Header cell of the positional index column.
pub const INDEX_HEADER: &str = "";

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write `df` to `path`, replacing any existing file.
///
/// See [`write_csv_with_index_to`] for the cell format.
pub fn write_csv_with_index(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_with_index_to(df, BufWriter::new(file))?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Wrote cleaned CSV"
    );
    Ok(())
}

/// Write `df` as CSV to any writer.
///
/// The first column is the unnamed 0-based row position. Booleans are written
/// as `True` / `False`, floats always carry a decimal point, integers never do,
/// and null cells are empty.
pub fn write_csv_with_index_to<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    let mut header = Vec::with_capacity(df.width() + 1);
    header.push(INDEX_HEADER.to_string());
    header.extend(df.get_column_names().iter().map(|name| name.to_string()));
    csv_writer.write_record(&header)?;

    let columns = df.get_columns();
    let mut record: Vec<String> = Vec::with_capacity(columns.len() + 1);
    for idx in 0..df.height() {
        record.clear();
        record.push(idx.to_string());
        for column in columns {
            record.push(any_to_string(column.get(idx)?));
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(OutputError::Flush)?;
    Ok(())
}
