//! Per-country medal views.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use olympics_model::columns::{
    COUNTRY_3_LETTER_CODE, COUNTRY_MEDAL_KEY, COUNTRY_NAME, PARTICIPANT_DETAIL_COLUMNS,
};
use olympics_model::country_code_map;

use crate::frame::{deduplicate_by, drop_columns, set_string_column, string_column};

/// One row per medal and country, without per-athlete columns.
///
/// Keeps the first row of each (discipline, game, event, gender, medal,
/// participant type, country code) combination.
pub fn medals_by_country(merged: &DataFrame) -> Result<DataFrame> {
    let mut df = merged.clone();
    deduplicate_by(&mut df, &COUNTRY_MEDAL_KEY)?;
    drop_columns(&mut df, &PARTICIPANT_DETAIL_COLUMNS)?;
    debug!(rows_in = merged.height(), rows_out = df.height(), "medals by country");
    Ok(df)
}

/// Replace `country_name` with the standardized name of the row's
/// 3-letter code, so successor and predecessor states share one name.
pub fn apply_std_country_names(df: &mut DataFrame) -> Result<()> {
    let map = country_code_map();
    let codes = string_column(df, COUNTRY_3_LETTER_CODE)?;
    let names = string_column(df, COUNTRY_NAME)?
        .into_iter()
        .zip(codes)
        .map(|(name, code)| {
            code.as_deref()
                .and_then(|code| map.resolve(code))
                .map(str::to_string)
                .or(name)
        })
        .collect();
    set_string_column(df, COUNTRY_NAME, names)
}
