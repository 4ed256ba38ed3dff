//! Tests for host merging, team medal collapsing and country views.

use olympics_ingest::DatasetStore;
use olympics_transform::{
    GamesCatalog, athlete_names, filter_eq, merge_hosts, pre_process_medal_counts,
};
use polars::prelude::*;

fn hosts() -> DataFrame {
    DataFrame::new(vec![
        Series::new("game_slug".into(), &["tokyo-2020", "rio-2016"]).into(),
        Series::new("game_name".into(), &["Tokyo 2020", "Rio 2016"]).into(),
        Series::new("game_year".into(), &[2020i64, 2016]).into(),
        Series::new("game_season".into(), &["Summer", "Summer"]).into(),
        Series::new("game_location".into(), &["Japan", "Brazil"]).into(),
    ])
    .unwrap()
}

/// Four relay members, one individual gold, one unnamed team medal and a
/// second team whose rows disagree on country code.
fn medals() -> DataFrame {
    let n = 9;
    DataFrame::new(vec![
        Series::new(
            "discipline_title".into(),
            &[
                "Athletics", "Athletics", "Athletics", "Athletics", "Athletics", "Football",
                "Rowing", "Rowing", "Athletics",
            ],
        )
        .into(),
        Series::new(
            "slug_game".into(),
            &[
                "tokyo-2020", "tokyo-2020", "tokyo-2020", "tokyo-2020", "tokyo-2020", "rio-2016",
                "rio-2016", "rio-2016", "paris-1900",
            ],
        )
        .into(),
        Series::new(
            "event_title".into(),
            &[
                "Men's 4 x 100m Relay",
                "Men's 4 x 100m Relay",
                "Men's 4 x 100m Relay",
                "Men's 4 x 100m Relay",
                "Men's 100m",
                "Men",
                "Men's Pair",
                "Men's Pair",
                "Men's 60m",
            ],
        )
        .into(),
        Series::new("event_gender".into(), vec!["Men"; n]).into(),
        Series::new("medal_type".into(), vec!["GOLD"; n]).into(),
        Series::new(
            "participant_type".into(),
            &[
                "GameTeam", "GameTeam", "GameTeam", "GameTeam", "Athlete", "GameTeam", "GameTeam",
                "GameTeam", "Athlete",
            ],
        )
        .into(),
        Series::new(
            "participant_title".into(),
            &[
                Some("Italy"),
                Some("Italy"),
                Some("Italy"),
                Some("Italy"),
                None,
                Some("Brazil"),
                Some("New Zealand"),
                Some("New Zealand"),
                None,
            ],
        )
        .into(),
        Series::new(
            "athlete_url".into(),
            &[
                Some("u/patta"),
                Some("u/jacobs"),
                Some("u/desalu"),
                Some("u/tortu"),
                Some("u/jacobs"),
                None,
                Some("u/murray"),
                Some("u/bond"),
                Some("u/tewksbury"),
            ],
        )
        .into(),
        Series::new(
            "athlete_full_name".into(),
            &[
                Some("Lorenzo PATTA"),
                Some("Lamont Marcell JACOBS"),
                Some("Eseosa DESALU"),
                Some("Filippo TORTU"),
                Some("Lamont Marcell JACOBS"),
                None,
                Some("Eric MURRAY"),
                Some("Hamish BOND"),
                Some("John Walter Beardsley TEWKSBURY"),
            ],
        )
        .into(),
        Series::new(
            "country_name".into(),
            &[
                "Italy",
                "Italy",
                "Italy",
                "Italy",
                "Italy",
                "Brazil",
                "New Zealand",
                "New Zealand",
                "United States of America",
            ],
        )
        .into(),
        Series::new(
            "country_code".into(),
            &["IT", "IT", "IT", "IT", "IT", "BR", "NZ", "NZL", "US"],
        )
        .into(),
        Series::new(
            "country_3_letter_code".into(),
            &["ITA", "ITA", "ITA", "ITA", "ITA", "BRA", "NZL", "NZL", "USA"],
        )
        .into(),
    ])
    .unwrap()
}

fn catalog() -> GamesCatalog {
    GamesCatalog::new(DatasetStore::from_frames(
        hosts(),
        medals(),
        DataFrame::empty(),
        DataFrame::empty(),
    ))
}

#[test]
fn merge_keeps_every_row_in_order() {
    let merged = merge_hosts(&medals(), &hosts()).unwrap();

    assert_eq!(merged.height(), 9);
    assert!(merged.column("game_slug").is_err());
    let width = medals().width();
    assert_eq!(merged.get_column_names()[width].as_str(), "game_name");

    let names = merged.column("game_name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("Tokyo 2020"));
    assert_eq!(names.get(5), Some("Rio 2016"));
    assert_eq!(names.get(8), None);
    let years = merged.column("game_year").unwrap().i64().unwrap();
    assert_eq!(years.get(8), None);
}

#[test]
fn merge_accepts_host_spelling_of_key() {
    let df = DataFrame::new(vec![
        Series::new("game_slug".into(), &["rio-2016"]).into(),
        Series::new("medal_type".into(), &["GOLD"]).into(),
    ])
    .unwrap();

    let merged = merge_hosts(&df, &hosts()).unwrap();

    assert!(merged.column("game_slug").is_err());
    let names = merged.column("game_name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("Rio 2016"));
}

#[test]
fn relay_team_collapses_to_one_row() {
    let counts = catalog().medal_counts().unwrap();

    let relay = filter_eq(&counts, &[("event_title", "4 x 100m relay men")]).unwrap();
    assert_eq!(relay.height(), 1);
    let names = athlete_names(&relay, 0).unwrap();
    assert_eq!(
        names,
        vec!["Lorenzo Patta", "Lamont Marcell Jacobs", "Eseosa Desalu", "Filippo Tortu"]
    );
    let codes = relay.column("country_code").unwrap().str().unwrap();
    assert_eq!(codes.get(0), Some("IT"));
    let urls = relay.column("athlete_url").unwrap().str().unwrap();
    assert_eq!(urls.get(0), None);
}

#[test]
fn output_order_and_passthrough_rows() {
    let counts = catalog().medal_counts().unwrap();

    // unnamed team, two collapsed teams, two athletes
    assert_eq!(counts.height(), 5);
    let ptype = counts.column("participant_type").unwrap().str().unwrap();
    let ptypes: Vec<_> = ptype.into_iter().flatten().collect();
    assert_eq!(
        ptypes,
        vec!["GameTeam", "GameTeam", "GameTeam", "Athlete", "Athlete"]
    );

    assert!(athlete_names(&counts, 0).unwrap().is_empty());
    assert_eq!(athlete_names(&counts, 3).unwrap(), vec!["Lamont Marcell Jacobs"]);
    let urls = counts.column("athlete_url").unwrap().str().unwrap();
    assert_eq!(urls.get(3), Some("u/jacobs"));
}

#[test]
fn athlete_rows_change_only_in_name_column_type() {
    let catalog = catalog();
    let merged = catalog.medals_merged().unwrap();
    let counts = catalog.medal_counts().unwrap();

    // row 3 of the counts is the first Athlete row, row 4 of the input
    let before = merged.drop("athlete_full_name").unwrap().slice(4, 1);
    let after = counts.drop("athlete_full_name").unwrap().slice(3, 1);
    assert!(before.equals_missing(&after));
    assert_eq!(athlete_names(&counts, 3).unwrap(), vec!["Lamont Marcell Jacobs"]);
}

#[test]
fn country_code_conflict_keeps_first_value() {
    let counts = catalog().medal_counts().unwrap();

    let pair = filter_eq(&counts, &[("event_title", "pair men")]).unwrap();
    assert_eq!(pair.height(), 1);
    let codes = pair.column("country_code").unwrap().str().unwrap();
    assert_eq!(codes.get(0), Some("NZ"));
}

#[test]
fn dedupe_requires_participant_type() {
    let df = DataFrame::new(vec![
        Series::new("athlete_full_name".into(), &["A"]).into(),
    ])
    .unwrap();

    assert!(pre_process_medal_counts(&df).is_err());
}

#[test]
fn medals_by_country_drops_team_members() {
    let by_country = catalog().medals_by_country().unwrap();

    assert_eq!(by_country.height(), 5);
    for column in ["participant_title", "athlete_url", "athlete_full_name", "country_code"] {
        assert!(by_country.column(column).is_err(), "{column} should be dropped");
    }
    let countries = by_country.column("country_name").unwrap().str().unwrap();
    assert_eq!(countries.get(4), Some("United States"));
}

#[test]
fn std_country_names_follow_the_code_map() {
    let medals = DataFrame::new(vec![
        Series::new("discipline_title".into(), &["Judo", "Judo"]).into(),
        Series::new("slug_game".into(), &["rio-2016", "rio-2016"]).into(),
        Series::new("event_title".into(), &["-60 kg", "-66 kg"]).into(),
        Series::new("event_gender".into(), &["Men", "Men"]).into(),
        Series::new("medal_type".into(), &["GOLD", "GOLD"]).into(),
        Series::new("participant_type".into(), &["Athlete", "Athlete"]).into(),
        Series::new("country_name".into(), &["Russian Federation", "Japan"]).into(),
        Series::new("country_3_letter_code".into(), &["RUS", "JPN"]).into(),
    ])
    .unwrap();
    let catalog = GamesCatalog::new(DatasetStore::from_frames(
        hosts(),
        medals,
        DataFrame::empty(),
        DataFrame::empty(),
    ));

    let df = catalog.medals_by_std_country_name().unwrap();

    let countries = df.column("country_name").unwrap().str().unwrap();
    assert_eq!(countries.get(0), Some("Russia"));
    assert_eq!(countries.get(1), Some("Japan"));
}

#[test]
fn hosts_with_country_codes_uses_medal_countries() {
    let hosts = catalog().hosts_with_country_codes().unwrap();

    let codes = hosts.column("game_country_code").unwrap().str().unwrap();
    assert_eq!(codes.get(0), None);
    assert_eq!(codes.get(1), Some("BRA"));
}

#[test]
fn catalog_accessors_return_copies() {
    let catalog = catalog();
    let _ = catalog.medal_counts().unwrap();

    assert_eq!(catalog.medals().height(), 9);
    let raw = catalog.medals();
    let names = raw.column("athlete_full_name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("Lorenzo PATTA"));
}
