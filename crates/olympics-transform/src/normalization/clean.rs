use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use olympics_model::columns::{ATHLETE_FULL_NAME, COUNTRY_NAME, DISCIPLINE_TITLE, EVENT_TITLE};
use olympics_model::{ReferenceMap, country_name_map, discipline_title_map};

use super::text::{
    RUGBY_SEVENS, discipline_event_fix, normalize_event_title, rugby_sevens_gender, title_case,
};
use crate::frame::{has_column, set_string_column, string_column};

/// Bring names and titles to their canonical form, in place.
///
/// Each step runs only when its column is present:
///
/// 1. `athlete_full_name` is title-cased.
/// 2. `country_name` aliases are replaced by their short name.
/// 3. `discipline_title` aliases are replaced by the current title, then,
///    with `event_title` present, Baseball, Softball and Rugby Sevens rows are
///    moved to their own discipline and every other event title is normalized.
///
/// Running it twice gives the same table as running it once.
pub fn clean_data(df: &mut DataFrame) -> Result<()> {
    if has_column(df, ATHLETE_FULL_NAME) {
        let names = string_column(df, ATHLETE_FULL_NAME)?
            .into_iter()
            .map(|name| name.map(|name| title_case(&name)))
            .collect();
        set_string_column(df, ATHLETE_FULL_NAME, names)?;
    }

    if has_column(df, COUNTRY_NAME) {
        apply_reference_map(df, COUNTRY_NAME, country_name_map())?;
    }

    if has_column(df, DISCIPLINE_TITLE) {
        apply_reference_map(df, DISCIPLINE_TITLE, discipline_title_map())?;
        if has_column(df, EVENT_TITLE) {
            fix_disciplines_events(df)?;
        }
    }

    Ok(())
}

fn apply_reference_map(df: &mut DataFrame, column: &str, map: &ReferenceMap) -> Result<()> {
    let mut replaced = 0usize;
    let values = string_column(df, column)?
        .into_iter()
        .map(|value| {
            value.map(|value| match map.resolve(&value) {
                Some(canonical) => {
                    replaced += 1;
                    canonical.to_string()
                }
                None => value,
            })
        })
        .collect();
    set_string_column(df, column, values)?;
    debug!(column, map = map.name(), replaced, "reference map applied");
    Ok(())
}

fn fix_disciplines_events(df: &mut DataFrame) -> Result<()> {
    let mut disciplines = string_column(df, DISCIPLINE_TITLE)?;
    let mut events = string_column(df, EVENT_TITLE)?;

    for (discipline, event) in disciplines.iter_mut().zip(events.iter_mut()) {
        let Some(title) = event.as_deref() else {
            continue;
        };
        if let Some((fixed_discipline, fixed_event)) = discipline_event_fix(title) {
            *discipline = Some(fixed_discipline.to_string());
            *event = Some(fixed_event.to_string());
        } else if let Some(gender) = rugby_sevens_gender(title) {
            *discipline = Some(RUGBY_SEVENS.to_string());
            *event = Some(gender.to_string());
        } else {
            *event = Some(normalize_event_title(title));
        }
    }

    set_string_column(df, DISCIPLINE_TITLE, disciplines)?;
    set_string_column(df, EVENT_TITLE, events)?;
    Ok(())
}
