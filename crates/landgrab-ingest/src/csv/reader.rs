//! CSV file reading into an all-text DataFrame.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_csv_line};

/// Column count above which a table is reported as unusually wide.
pub const WIDE_TABLE_COLUMNS: usize = 500;

/// Reads the first line of a file, without its BOM.
fn read_header_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if bytes == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let cleaned = trimmed.strip_prefix('\u{feff}').unwrap_or(trimmed);
    Ok(Some(cleaned.to_string()))
}

/// Reads and normalizes the header row.
///
/// Blank header cells are named `Unnamed: <position>` (0-based), which is how
/// an unnamed index column written by this tool or by pandas reads back.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let Some(line) = read_header_line(path)? else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    let raw = parse_csv_line(&line);
    if raw.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut columns = Vec::with_capacity(raw.len());
    for (position, name) in raw.into_iter().enumerate() {
        let name = if name.is_empty() {
            format!("Unnamed: {position}")
        } else {
            name
        };
        if !seen.insert(name.clone()) {
            return Err(IngestError::DuplicateColumnName {
                path: path.to_path_buf(),
                column: name,
            });
        }
        columns.push(name);
    }

    Ok(CsvHeaders::new(columns))
}

/// Validate DataFrame shape after loading.
///
/// A header-only file is legal (the cleaner keeps zero rows) but is logged,
/// as are very wide tables.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) {
    if df.height() == 0 {
        tracing::warn!(path = %path.display(), "CSV file has a header but no data rows");
    }

    if df.width() > WIDE_TABLE_COLUMNS {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than {WIDE_TABLE_COLUMNS} columns - may impact performance"
        );
    }
}

/// Reads a CSV file into a Polars DataFrame with every column typed as text.
///
/// Column names are taken from [`read_csv_schema`], so surrounding whitespace
/// and a leading BOM never leak into names. Empty fields load as null.
pub fn read_csv_table(path: &Path) -> Result<(DataFrame, CsvHeaders)> {
    let headers = read_csv_schema(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == headers.len() {
        let current: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        for (old, new) in current.iter().zip(&headers.columns) {
            if old != new {
                df.rename(old, new.as_str().into())?;
            }
        }
    } else {
        tracing::warn!(
            path = %path.display(),
            header_columns = headers.len(),
            parsed_columns = df.width(),
            "Header line and parsed table disagree on width; keeping parser names"
        );
    }

    validate_dataframe_shape(&df, path);
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV table"
    );

    Ok((df, headers))
}
