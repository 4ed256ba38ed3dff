//! One row per team medal.
//!
//! The medals table records a team medal once per team member. Counting rows
//! would credit a relay gold four times, so team rows are collapsed to one row
//! carrying the list of athlete names.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use polars::prelude::{
    DataFrame, IdxSize, IntoSeries, ListChunked, NamedFrom, NewChunkedArray, Series, UInt32Chunked,
};
use tracing::{info, warn};

use olympics_model::ParticipantType;
use olympics_model::columns::{
    ATHLETE_FULL_NAME, ATHLETE_URL, COUNTRY_CODE, PARTICIPANT_TYPE, TEAM_MEDAL_KEY,
};

use crate::frame::{has_column, set_string_column, string_column};

/// Accumulator for the rows of one team medal.
struct TeamMedal {
    first_row: usize,
    names: Vec<String>,
    country_code: Option<String>,
}

impl TeamMedal {
    fn add_name(&mut self, name: String) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }
}

/// Where an input row ends up in the output.
enum RowKind {
    Single(Option<String>),
    Team(Vec<String>),
}

/// Collapse team medals to one row each.
///
/// Output order: `GameTeam` rows without athlete names, collapsed team
/// medals (ordered by their key), `Athlete` rows, then rows of any other
/// participant type. `athlete_full_name` becomes a list column for every row.
/// A collapsed row keeps the first row's values, a null `athlete_url`, and the
/// team's names in first-seen order. `Athlete` rows and unnamed `GameTeam`
/// rows pass through with their values intact; only the type of their
/// `athlete_full_name` cell changes, to a one-element or null list.
pub fn pre_process_medal_counts(df: &DataFrame) -> Result<DataFrame> {
    let participant_types = string_column(df, PARTICIPANT_TYPE).context("dedupe medals")?;
    let names = string_column(df, ATHLETE_FULL_NAME).context("dedupe medals")?;
    let country_codes = if has_column(df, COUNTRY_CODE) {
        string_column(df, COUNTRY_CODE)?
    } else {
        vec![None; df.height()]
    };
    let mut key_columns = Vec::with_capacity(TEAM_MEDAL_KEY.len());
    for key in TEAM_MEDAL_KEY {
        key_columns.push(string_column(df, key).with_context(|| format!("team key {key}"))?);
    }

    let mut unnamed_teams = Vec::new();
    let mut athletes = Vec::new();
    let mut others = Vec::new();
    let mut teams: BTreeMap<Vec<Option<String>>, TeamMedal> = BTreeMap::new();

    for idx in 0..df.height() {
        let participant = participant_types[idx]
            .as_deref()
            .and_then(|value| value.parse::<ParticipantType>().ok());
        match (participant, &names[idx]) {
            (Some(ParticipantType::Athlete), _) => athletes.push(idx),
            (Some(ParticipantType::GameTeam), None) => unnamed_teams.push(idx),
            (Some(ParticipantType::GameTeam), Some(name)) => {
                let key: Vec<Option<String>> =
                    key_columns.iter().map(|col| col[idx].clone()).collect();
                let team = teams.entry(key).or_insert_with(|| TeamMedal {
                    first_row: idx,
                    names: Vec::new(),
                    country_code: country_codes[idx].clone(),
                });
                if country_codes[idx] != team.country_code {
                    warn!(
                        row = idx,
                        kept = ?team.country_code,
                        found = ?country_codes[idx],
                        "country code differs within team medal, keeping first"
                    );
                }
                team.add_name(name.clone());
            }
            (None, _) => others.push(idx),
        }
    }

    let mut order: Vec<IdxSize> = Vec::with_capacity(df.height());
    let mut kinds: Vec<RowKind> = Vec::with_capacity(df.height());
    for &idx in &unnamed_teams {
        order.push(idx as IdxSize);
        kinds.push(RowKind::Single(None));
    }
    let team_count = teams.len();
    for team in teams.into_values() {
        order.push(team.first_row as IdxSize);
        kinds.push(RowKind::Team(team.names));
    }
    for &idx in athletes.iter().chain(&others) {
        order.push(idx as IdxSize);
        kinds.push(RowKind::Single(names[idx].clone()));
    }

    let idx = UInt32Chunked::from_vec("row".into(), order);
    let mut out = df.take(&idx).context("dedupe medals: gather rows")?;

    if has_column(&out, ATHLETE_URL) {
        let urls = string_column(&out, ATHLETE_URL)?
            .into_iter()
            .zip(&kinds)
            .map(|(url, kind)| match kind {
                RowKind::Team(_) => None,
                RowKind::Single(_) => url,
            })
            .collect();
        set_string_column(&mut out, ATHLETE_URL, urls)?;
    }

    let name_lists: ListChunked = kinds
        .into_iter()
        .map(|kind| match kind {
            RowKind::Single(name) => name.map(|name| Series::new("".into(), [name])),
            RowKind::Team(names) => Some(Series::new("".into(), names)),
        })
        .collect();
    out.with_column(name_lists.with_name(ATHLETE_FULL_NAME.into()).into_series())?;

    info!(
        rows_in = df.height(),
        rows_out = out.height(),
        teams = team_count,
        unnamed_teams = unnamed_teams.len(),
        athletes = athletes.len(),
        "team medals collapsed"
    );
    Ok(out)
}

/// Athlete names stored in the list column of a deduplicated frame.
pub fn athlete_names(df: &DataFrame, row: usize) -> Result<Vec<String>> {
    let lists = df
        .column(ATHLETE_FULL_NAME)?
        .as_materialized_series()
        .list()
        .context("athlete_full_name is not a list column")?
        .clone();
    let Some(names) = lists.get_as_series(row) else {
        return Ok(Vec::new());
    };
    Ok(names
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect())
}
