//! Host metadata merge and host country codes.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IdxSize, NewChunkedArray, UInt32Chunked};
use tracing::{debug, warn};

use olympics_model::columns::{
    COUNTRY_3_LETTER_CODE, COUNTRY_NAME, GAME_COUNTRY_CODE, GAME_LOCATION, GAME_SLUG, SLUG_GAME,
};
use olympics_model::host_location_fixes;

use crate::frame::{drop_columns, has_column, set_string_column, string_column};

/// Left-join `df` to `hosts` on the game slug.
///
/// The record key is `slug_game` (or `game_slug` when a table uses the host
/// spelling). Every input row is kept in order; rows whose slug has no host
/// get null host fields. Host columns are appended after the record columns
/// and the host key is not kept.
pub fn merge_hosts(df: &DataFrame, hosts: &DataFrame) -> Result<DataFrame> {
    let record_key = if has_column(df, SLUG_GAME) {
        SLUG_GAME
    } else {
        GAME_SLUG
    };
    let record_slugs = string_column(df, record_key).context("merge hosts: record key")?;
    let host_slugs = string_column(hosts, GAME_SLUG).context("merge hosts: host key")?;

    let mut host_rows: HashMap<&str, IdxSize> = HashMap::with_capacity(host_slugs.len());
    for (idx, slug) in host_slugs.iter().enumerate() {
        let Some(slug) = slug.as_deref() else {
            continue;
        };
        if host_rows.contains_key(slug) {
            warn!(slug, "duplicate host slug, keeping first");
            continue;
        }
        host_rows.insert(slug, idx as IdxSize);
    }

    let mut unmatched = 0usize;
    let matches: Vec<Option<IdxSize>> = record_slugs
        .iter()
        .map(|slug| {
            let found = slug.as_deref().and_then(|slug| host_rows.get(slug).copied());
            if found.is_none() {
                unmatched += 1;
            }
            found
        })
        .collect();

    let mut host_side = hosts.drop(GAME_SLUG)?;
    let clashing: Vec<String> = host_side
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| has_column(df, name))
        .collect();
    if !clashing.is_empty() {
        debug!(columns = ?clashing, "record already carries host columns, keeping record values");
        for name in &clashing {
            host_side = host_side.drop(name)?;
        }
    }

    let idx = UInt32Chunked::from_iter_options("host_row".into(), matches.into_iter());
    let host_side = host_side.take(&idx).context("merge hosts: gather host rows")?;

    let mut merged = df.clone();
    if record_key == GAME_SLUG {
        merged = merged.drop(GAME_SLUG)?;
    }
    let host_columns: Vec<Column> = host_side.get_columns().to_vec();
    merged = merged.hstack(&host_columns)?;

    if unmatched > 0 {
        debug!(rows = unmatched, "rows without a matching host");
    }
    Ok(merged)
}

/// Distinct country names with their 3-letter code, sorted by name.
///
/// Only the first name is kept for a code that appears under several names.
/// Rows with a null name or code are skipped.
pub fn country_name_codes(df: &DataFrame) -> Result<Vec<(String, String)>> {
    let names = string_column(df, COUNTRY_NAME)?;
    let codes = string_column(df, COUNTRY_3_LETTER_CODE)?;

    let mut pairs: Vec<(String, String)> = names
        .into_iter()
        .zip(codes)
        .filter_map(|(name, code)| Some((name?, code?)))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut seen_codes = HashSet::new();
    pairs.retain(|(_, code)| seen_codes.insert(code.clone()));
    Ok(pairs)
}

/// Hosts with a `game_country_code` column resolved from `game_location`.
///
/// Locations named differently in the medals table are corrected by game slug
/// first. `name_codes` is the output of [`country_name_codes`]. Locations
/// without a known code get a null code.
pub fn hosts_with_country_codes(
    hosts: &DataFrame,
    name_codes: &[(String, String)],
) -> Result<DataFrame> {
    let fixes = host_location_fixes();
    let slugs = string_column(hosts, GAME_SLUG)?;
    let locations: Vec<Option<String>> = string_column(hosts, GAME_LOCATION)?
        .into_iter()
        .zip(&slugs)
        .map(|(location, slug)| {
            slug.as_deref()
                .and_then(|slug| fixes.resolve(slug))
                .map(str::to_string)
                .or(location)
        })
        .collect();

    let lookup: HashMap<&str, &str> = name_codes
        .iter()
        .map(|(name, code)| (name.as_str(), code.as_str()))
        .collect();
    let codes: Vec<Option<String>> = locations
        .iter()
        .map(|location| {
            location
                .as_deref()
                .and_then(|location| lookup.get(location))
                .map(|code| (*code).to_string())
        })
        .collect();

    let mut out = hosts.clone();
    drop_columns(&mut out, &[GAME_COUNTRY_CODE])?;
    set_string_column(&mut out, GAME_LOCATION, locations)?;
    set_string_column(&mut out, GAME_COUNTRY_CODE, codes)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn hosts() -> DataFrame {
        DataFrame::new(vec![
            Series::new("game_slug".into(), &["seoul-1988", "tokyo-2020"]).into(),
            Series::new("game_location".into(), &["Republic of Korea", "Japan"]).into(),
            Series::new("game_year".into(), &[1988i64, 2020]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn host_location_fix_applies_before_lookup() {
        let codes = vec![
            ("Japan".to_string(), "JPN".to_string()),
            ("South Korea".to_string(), "KOR".to_string()),
        ];
        let out = hosts_with_country_codes(&hosts(), &codes).unwrap();

        let locations = string_column(&out, GAME_LOCATION).unwrap();
        assert_eq!(locations[0].as_deref(), Some("South Korea"));
        let codes = string_column(&out, GAME_COUNTRY_CODE).unwrap();
        assert_eq!(codes, vec![Some("KOR".to_string()), Some("JPN".to_string())]);
    }

    #[test]
    fn country_name_codes_keeps_first_name_per_code() {
        let df = DataFrame::new(vec![
            Series::new("country_name".into(), &["Russia", "ROC", "Italy", "Russia"]).into(),
            Series::new("country_3_letter_code".into(), &["RUS", "RUS", "ITA", "RUS"]).into(),
        ])
        .unwrap();

        let pairs = country_name_codes(&df).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("Italy".to_string(), "ITA".to_string()),
                ("ROC".to_string(), "RUS".to_string()),
            ]
        );
    }
}
