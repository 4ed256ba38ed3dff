//! Heatmap output: file names, CSV and JSON.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::heatmap::Heatmap;

/// Draws a finished heatmap.
///
/// A plotting backend implements this; `save` asks it to also persist the
/// rendering and return where it was written.
pub trait HeatmapRenderer {
    fn render(&mut self, heatmap: &Heatmap, title: &str, save: bool) -> Result<Option<PathBuf>>;
}

/// Deterministic lower-case file stem built from title parameters.
///
/// `(["United States", "Summer"], "medals")` gives `united_states_summer_medals`.
pub fn output_slug<S: AsRef<str>>(parts: &[S], suffix: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .chain(std::iter::once(suffix))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
        })
        .collect::<Vec<_>>()
        .join("_")
}

fn flat_label(label: &str) -> String {
    label.replace('\n', " ")
}

/// Write the heatmap as CSV to any writer.
///
/// The header starts with an empty cell above the row labels. Empty cells
/// are written as empty fields.
pub fn write_heatmap<W: Write>(heatmap: &Heatmap, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut header = Vec::with_capacity(heatmap.width() + 1);
    header.push(String::new());
    header.extend(heatmap.column_labels.iter().map(|label| flat_label(label)));
    csv.write_record(&header)?;

    for (label, cells) in heatmap.row_labels.iter().zip(&heatmap.cells) {
        let mut record = Vec::with_capacity(cells.len() + 1);
        record.push(flat_label(label));
        record.extend(
            cells
                .iter()
                .map(|cell| cell.map(|count| count.to_string()).unwrap_or_default()),
        );
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the heatmap to a CSV file.
pub fn write_heatmap_csv(heatmap: &Heatmap, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_heatmap(heatmap, file).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = heatmap.height(), "heatmap saved");
    Ok(())
}

pub fn heatmap_json(heatmap: &Heatmap) -> Result<String> {
    serde_json::to_string_pretty(heatmap).context("serialize heatmap")
}
