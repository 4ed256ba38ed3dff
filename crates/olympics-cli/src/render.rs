//! Terminal rendering of heatmaps and dataset previews.

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use olympics_ingest::{FrameProfile, any_to_string};
use olympics_report::{
    Heatmap, HeatmapRenderer, TOTAL_LABEL, heatmap_json, output_slug, write_heatmap_csv,
};

/// How a heatmap is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Prints heatmaps to stdout and saves them as CSV on request.
///
/// Saved files are named `<slug of title>_<suffix>.csv` inside the output
/// directory.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    output_dir: PathBuf,
    format: OutputFormat,
    suffix: String,
}

impl TerminalRenderer {
    pub fn new(output_dir: &Path, format: OutputFormat, suffix: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            format,
            suffix: suffix.to_string(),
        }
    }

    /// Where a heatmap with this title is saved.
    pub fn save_path(&self, title: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.csv", output_slug(&[title], &self.suffix)))
    }
}

impl HeatmapRenderer for TerminalRenderer {
    fn render(&mut self, heatmap: &Heatmap, title: &str, save: bool) -> Result<Option<PathBuf>> {
        match self.format {
            OutputFormat::Table => {
                println!("{title}");
                println!("{}", heatmap_table(heatmap));
            }
            OutputFormat::Json => println!("{}", heatmap_json(heatmap)?),
        }
        if !save {
            return Ok(None);
        }
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.save_path(title);
        write_heatmap_csv(heatmap, &path)?;
        Ok(Some(path))
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Heatmap as a table; empty cells are blank and margins are bold.
pub fn heatmap_table(heatmap: &Heatmap) -> Table {
    let mut table = Table::new();
    let mut header = vec![Cell::new("")];
    header.extend(heatmap.column_labels.iter().map(|label| header_cell(label)));
    table.set_header(header);
    apply_table_style(&mut table);

    for (label, cells) in heatmap.row_labels.iter().zip(&heatmap.cells) {
        let is_total_row = heatmap.has_totals && label == TOTAL_LABEL;
        let mut row = vec![label_cell(label, is_total_row)];
        for (idx, cell) in cells.iter().enumerate() {
            let is_total = is_total_row || (heatmap.has_totals && idx + 1 == cells.len());
            row.push(count_cell(*cell, is_total));
        }
        table.add_row(row);
    }
    for index in 1..=heatmap.width() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

/// The first `rows` rows of a frame.
pub fn frame_table(df: &DataFrame, rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let columns = df.get_columns();
    for idx in 0..rows.min(df.height()) {
        let row: Vec<Cell> = columns
            .iter()
            .map(|column| match column.get(idx).unwrap_or(AnyValue::Null) {
                AnyValue::Null => dim_cell("null"),
                value => Cell::new(any_to_string(value)),
            })
            .collect();
        table.add_row(row);
    }
    table
}

/// Column types and null counts.
pub fn profile_table(profile: &FrameProfile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-null"),
        header_cell("Null"),
    ]);
    apply_table_style(&mut table);
    for column in &profile.columns {
        let nulls = if column.nulls > 0 {
            Cell::new(column.nulls).fg(Color::Yellow)
        } else {
            dim_cell(column.nulls)
        };
        table.add_row(vec![
            Cell::new(&column.name),
            dim_cell(&column.dtype),
            Cell::new(column.non_null),
            nulls,
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str, is_total: bool) -> Cell {
    let cell = Cell::new(label);
    if is_total {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn count_cell(count: Option<u64>, is_total: bool) -> Cell {
    let Some(count) = count else {
        return Cell::new("");
    };
    let cell = Cell::new(count);
    if is_total {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell.fg(Color::Green)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
