//! The heatmap variants drawn by the reports.

use anyhow::Result;
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::info;

use olympics_model::Season;
use olympics_model::columns::{
    COUNTRY_NAME, DISCIPLINE_TITLE, EVENT_GENDER, EVENT_TITLE, GAME_NAME, GAME_SEASON, GAME_YEAR,
};
use olympics_transform::filter_eq;

use crate::heatmap::Heatmap;
use crate::labels::{compact_game_labels, discipline_label, year_label};
use crate::pivot::{CellMode, ColumnOrder, PivotSpec, RowOrder, pivot_counts};

/// Which disciplines were held in which years of one season.
///
/// Cells are `1` where the discipline was held. Disciplines held at the most
/// recent Games come first. Years are labeled `18\n96`, disciplines are broken
/// at their first space.
pub fn discipline_game_heatmap(df: &DataFrame, season: Season) -> Result<Heatmap> {
    let season_rows = filter_eq(df, &[(GAME_SEASON, season.as_str())])?;
    let spec = PivotSpec::new(DISCIPLINE_TITLE, GAME_YEAR)
        .mode(CellMode::Presence)
        .row_order(RowOrder::RecentPresence);
    let heatmap = pivot_counts(&season_rows, &spec)?
        .map_column_labels(year_label)
        .map_row_labels(discipline_label);
    info!(
        season = %season,
        disciplines = heatmap.height(),
        games = heatmap.width(),
        "discipline heatmap"
    );
    Ok(heatmap)
}

/// Medal counts of one country by discipline and game, with totals.
///
/// The caller restricts `df` to one season beforehand.
pub fn country_medal_heatmap(df: &DataFrame, country: &str) -> Result<Heatmap> {
    let country_rows = filter_eq(df, &[(COUNTRY_NAME, country)])?;
    let spec = PivotSpec::new(DISCIPLINE_TITLE, GAME_NAME).column_order(ColumnOrder::Chronological);
    let heatmap = compact_and_total(pivot_counts(&country_rows, &spec)?);
    info!(
        country,
        medals = heatmap.body_sum(),
        "country medal heatmap"
    );
    Ok(heatmap)
}

/// Selection for [`country_event_heatmap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEventFilter {
    pub country: String,
    pub discipline: String,
    pub gender: String,
    pub season: Season,
}

/// Medal counts of one country by event and game, for one discipline,
/// gender and season, with totals.
pub fn country_event_heatmap(df: &DataFrame, filter: &CountryEventFilter) -> Result<Heatmap> {
    let rows = filter_eq(
        df,
        &[
            (COUNTRY_NAME, filter.country.as_str()),
            (DISCIPLINE_TITLE, filter.discipline.as_str()),
            (EVENT_GENDER, filter.gender.as_str()),
            (GAME_SEASON, filter.season.as_str()),
        ],
    )?;
    let spec = PivotSpec::new(EVENT_TITLE, GAME_NAME).column_order(ColumnOrder::Chronological);
    let heatmap = compact_and_total(pivot_counts(&rows, &spec)?);
    info!(
        country = %filter.country,
        discipline = %filter.discipline,
        events = heatmap.height().saturating_sub(1),
        "country event heatmap"
    );
    Ok(heatmap)
}

fn compact_and_total(mut heatmap: Heatmap) -> Heatmap {
    heatmap.column_labels = compact_game_labels(&heatmap.column_labels);
    heatmap.with_totals()
}
