//! Generic group-and-count pivot.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use olympics_transform::frame::string_column;

use crate::heatmap::Heatmap;
use crate::labels::sort_game_names;

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMode {
    /// Number of records in the cell.
    Count,
    /// `1` when at least one record fell into the cell.
    Presence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrder {
    /// Ascending text order.
    Natural,
    /// Game names ordered by their trailing year.
    Chronological,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Ascending text order.
    Natural,
    /// Rows present in the last column first, then each part ordered by its
    /// presence across columns, earliest column first. Ties stay alphabetical.
    RecentPresence,
}

/// Configuration of one pivot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotSpec {
    pub row_key: String,
    pub column_key: String,
    pub mode: CellMode,
    pub column_order: ColumnOrder,
    pub row_order: RowOrder,
    pub totals: bool,
}

impl PivotSpec {
    pub fn new(row_key: &str, column_key: &str) -> Self {
        Self {
            row_key: row_key.to_string(),
            column_key: column_key.to_string(),
            mode: CellMode::Count,
            column_order: ColumnOrder::Natural,
            row_order: RowOrder::Natural,
            totals: false,
        }
    }

    pub fn mode(mut self, mode: CellMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn column_order(mut self, order: ColumnOrder) -> Self {
        self.column_order = order;
        self
    }

    pub fn row_order(mut self, order: RowOrder) -> Self {
        self.row_order = order;
        self
    }

    pub fn totals(mut self, totals: bool) -> Self {
        self.totals = totals;
        self
    }
}

/// Group `df` by the row and column keys and count records per cell.
///
/// Records with a null row or column key are not counted. Both key columns
/// must exist.
pub fn pivot_counts(df: &DataFrame, spec: &PivotSpec) -> Result<Heatmap> {
    let rows = string_column(df, &spec.row_key)
        .with_context(|| format!("pivot row key {}", spec.row_key))?;
    let columns = string_column(df, &spec.column_key)
        .with_context(|| format!("pivot column key {}", spec.column_key))?;

    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();
    for (row, column) in rows.into_iter().zip(columns) {
        if let (Some(row), Some(column)) = (row, column) {
            *counts.entry((row, column)).or_insert(0) += 1;
        }
    }

    let row_set: BTreeSet<&str> = counts.keys().map(|(row, _)| row.as_str()).collect();
    let column_set: BTreeSet<&str> = counts.keys().map(|(_, column)| column.as_str()).collect();
    let column_labels: Vec<String> = match spec.column_order {
        ColumnOrder::Natural => column_set.iter().map(|c| (*c).to_string()).collect(),
        ColumnOrder::Chronological => {
            sort_game_names(&column_set.iter().copied().collect::<Vec<_>>())
        }
    };

    let cell = |row: &str, column: &str| -> Option<u64> {
        counts
            .get(&(row.to_string(), column.to_string()))
            .map(|count| match spec.mode {
                CellMode::Count => *count,
                CellMode::Presence => 1,
            })
    };
    let mut table: Vec<(String, Vec<Option<u64>>)> = row_set
        .into_iter()
        .map(|row| {
            let cells = column_labels
                .iter()
                .map(|column| cell(row, column.as_str()))
                .collect();
            (row.to_string(), cells)
        })
        .collect();

    if spec.row_order == RowOrder::RecentPresence {
        table.sort_by_key(|(_, cells)| {
            let current = cells.last().is_some_and(Option::is_some);
            let absent: Vec<bool> = cells.iter().map(Option::is_none).collect();
            (!current, absent)
        });
    }

    let (row_labels, cells): (Vec<String>, Vec<Vec<Option<u64>>>) = table.into_iter().unzip();
    debug!(
        row_key = %spec.row_key,
        column_key = %spec.column_key,
        rows = row_labels.len(),
        columns = column_labels.len(),
        "pivot built"
    );

    let heatmap = Heatmap::new(row_labels, column_labels, cells);
    Ok(if spec.totals {
        heatmap.with_totals()
    } else {
        heatmap
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn frame(rows: &[&str], columns: &[&str]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("discipline_title".into(), rows).into(),
            Series::new("game_year".into(), columns).into(),
        ])
        .unwrap()
    }

    #[test]
    fn presence_marks_gaps_as_empty() {
        let df = frame(
            &["Golf", "Golf", "Golf", "Rugby Sevens"],
            &["1900", "1900", "1908", "1904"],
        );
        let spec = PivotSpec::new("discipline_title", "game_year").mode(CellMode::Presence);

        let heatmap = pivot_counts(&df, &spec).unwrap();

        assert_eq!(heatmap.column_labels, vec!["1900", "1904", "1908"]);
        assert_eq!(heatmap.get("Golf", "1900"), Some(1));
        assert_eq!(heatmap.get("Golf", "1904"), None);
        assert_eq!(heatmap.get("Golf", "1908"), Some(1));
    }

    #[test]
    fn recent_disciplines_come_first() {
        let df = frame(
            &["Archery", "Boxing", "Boxing", "Curling", "Diving"],
            &["2000", "1996", "2004", "2004", "1996"],
        );
        let spec = PivotSpec::new("discipline_title", "game_year")
            .mode(CellMode::Presence)
            .row_order(RowOrder::RecentPresence);

        let heatmap = pivot_counts(&df, &spec).unwrap();

        assert_eq!(
            heatmap.row_labels,
            vec!["Boxing", "Curling", "Diving", "Archery"]
        );
    }

    #[test]
    fn missing_key_column_is_error() {
        let df = frame(&["Golf"], &["1900"]);
        assert!(pivot_counts(&df, &PivotSpec::new("discipline_title", "game_name")).is_err());
    }
}
