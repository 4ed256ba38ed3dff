//! CSV file reading into Polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Rows scanned to infer column types. The datasets mix integer and text
/// columns whose first rows can be empty, so a short scan is not enough.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Reads a single-header CSV file into a DataFrame.
///
/// Empty fields load as nulls.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
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

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );

    Ok(df)
}
