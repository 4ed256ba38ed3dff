//! DataFrame helpers shared by the transformation steps.
//!
//! Cell values are read through `AnyValue` and compared as strings, so a
//! `game_year` loaded as an integer matches the filter value `"2020"`.

use std::collections::HashSet;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use olympics_ingest::any_to_string_opt;

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Values of a column as optional strings; nulls stay `None`.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string_opt(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Replace or append a string column.
pub fn set_string_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)
        .with_context(|| format!("set column {name}"))?;
    Ok(())
}

pub fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}

/// Rows where every `(column, value)` pair matches exactly. Nulls never match.
pub fn filter_eq(df: &DataFrame, conditions: &[(&str, &str)]) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    for (name, expected) in conditions {
        let values = string_column(df, name).with_context(|| format!("filter on {name}"))?;
        for (flag, value) in keep.iter_mut().zip(values) {
            *flag = *flag && value.as_deref() == Some(*expected);
        }
    }
    let mut filtered = df.clone();
    filter_rows(&mut filtered, &keep)?;
    Ok(filtered)
}

/// Keep the first row of every distinct combination of `keys`.
///
/// Null and empty values are distinct key parts.
pub fn deduplicate_by<S: AsRef<str>>(df: &mut DataFrame, keys: &[S]) -> Result<()> {
    if keys.is_empty() || df.height() == 0 {
        return Ok(());
    }
    let mut key_columns = Vec::with_capacity(keys.len());
    for key in keys {
        key_columns.push(string_column(df, key.as_ref())?);
    }
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let key: Vec<Option<String>> = key_columns.iter().map(|col| col[idx].clone()).collect();
        keep.push(seen.insert(key));
    }
    filter_rows(df, &keep)
}

/// Drop the named columns that are present; absent names are ignored.
pub fn drop_columns(df: &mut DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        if has_column(df, name) {
            *df = df.drop(name)?;
        }
    }
    Ok(())
}
