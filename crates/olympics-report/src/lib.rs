//! Olympic Games heatmap reporting.
//!
//! This crate aggregates cleaned tables into labeled count matrices:
//!
//! - **pivot**: The generic group-and-count routine
//! - **heatmap**: The count matrix with optional `Total` margins
//! - **heatmaps**: Discipline, country and event heatmap variants
//! - **labels**: Axis ordering and line-broken labels for plotting
//! - **export**: CSV and JSON output and the renderer seam

mod export;
mod heatmap;
mod heatmaps;
mod labels;
mod pivot;

pub use export::{HeatmapRenderer, heatmap_json, output_slug, write_heatmap, write_heatmap_csv};
pub use heatmap::{Heatmap, TOTAL_LABEL};
pub use heatmaps::{
    CountryEventFilter, country_event_heatmap, country_medal_heatmap, discipline_game_heatmap,
};
pub use labels::{compact_game_labels, discipline_label, sort_game_names, year_label};
pub use pivot::{CellMode, ColumnOrder, PivotSpec, RowOrder, pivot_counts};
