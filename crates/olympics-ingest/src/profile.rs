//! Column profiles used when exploring a dataset.

use polars::prelude::DataFrame;
use serde::Serialize;

/// Type and null statistics for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub nulls: usize,
}

/// Shape and per-column statistics of a DataFrame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameProfile {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

impl FrameProfile {
    /// Columns that contain at least one null.
    pub fn columns_with_nulls(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|column| column.nulls > 0)
    }
}

/// Summarize the columns of `df` in their original order.
pub fn profile_frame(df: &DataFrame) -> FrameProfile {
    let rows = df.height();
    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            let nulls = column.null_count();
            ColumnProfile {
                name: column.name().to_string(),
                dtype: column.dtype().to_string(),
                non_null: rows - nulls,
                nulls,
            }
        })
        .collect();
    FrameProfile { rows, columns }
}
