//! Tests for the heatmap variants and their export.

use olympics_model::Season;
use olympics_model::columns::TEAM_MEDAL_KEY;
use olympics_report::{
    CountryEventFilter, TOTAL_LABEL, country_event_heatmap, country_medal_heatmap,
    discipline_game_heatmap, heatmap_json, write_heatmap, write_heatmap_csv,
};
use olympics_transform::pre_process_medal_counts;
use polars::prelude::*;
use proptest::prelude::*;
use tempfile::TempDir;

fn medal_frame(rows: &[(&str, &str, &str, &str, &str)]) -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "country_name".into(),
            rows.iter().map(|r| r.0).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "discipline_title".into(),
            rows.iter().map(|r| r.1).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "game_name".into(),
            rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "event_title".into(),
            rows.iter().map(|r| r.3).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "event_gender".into(),
            rows.iter().map(|r| r.4).collect::<Vec<_>>(),
        )
        .into(),
    ])
    .unwrap()
}

fn italy_medals() -> DataFrame {
    medal_frame(&[
        ("Italy", "Athletics", "Tokyo 2020", "100m men", "Men"),
        ("Italy", "Athletics", "Tokyo 2020", "high jump men", "Men"),
        ("Italy", "Rowing", "Rio 2016", "pair men", "Men"),
        ("Italy", "Athletics", "Rio 2016", "marathon women", "Women"),
        ("France", "Rowing", "Tokyo 2020", "pair men", "Men"),
    ])
}

#[test]
fn country_heatmap_exports_as_csv() {
    let heatmap = country_medal_heatmap(&italy_medals(), "Italy").unwrap();

    let mut buffer = Vec::new();
    write_heatmap(&heatmap, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    insta::assert_snapshot!(output.trim_end(), @r"
    ,Rio 2016,Tokyo 2020,Total
    Athletics,1,2,3
    Rowing,1,,1
    Total,2,2,4
    ");
}

/// A relay gold recorded once per runner plus one individual gold.
fn relay_medal_rows() -> DataFrame {
    let events = ["4 x 100m relay men", "4 x 100m relay men", "4 x 100m relay men", "100m men"];
    let mut columns: Vec<Column> = TEAM_MEDAL_KEY
        .iter()
        .map(|&name| {
            let values: Vec<Option<&str>> = match name {
                "discipline_title" => vec![Some("Athletics"); 4],
                "event_title" => events.iter().copied().map(Some).collect(),
                "event_gender" => vec![Some("Men"); 4],
                "medal_type" => vec![Some("GOLD"); 4],
                "participant_type" => {
                    vec![Some("GameTeam"), Some("GameTeam"), Some("GameTeam"), Some("Athlete")]
                }
                "participant_title" => vec![Some("Italy"), Some("Italy"), Some("Italy"), None],
                "country_name" => vec![Some("Italy"); 4],
                "country_3_letter_code" => vec![Some("ITA"); 4],
                "game_location" => vec![Some("Japan"); 4],
                "game_season" => vec![Some("Summer"); 4],
                "game_name" => vec![Some("Tokyo 2020"); 4],
                "game_year" => vec![Some("2020"); 4],
                _ => vec![None; 4],
            };
            Series::new(name.into(), values).into_column()
        })
        .collect();
    columns.push(
        Series::new(
            "athlete_full_name".into(),
            &["Lorenzo Patta", "Eseosa Desalu", "Filippo Tortu", "Lamont Marcell Jacobs"],
        )
        .into_column(),
    );
    DataFrame::new(columns).unwrap()
}

#[test]
fn country_heatmap_counts_team_medals_once() {
    let raw = relay_medal_rows();
    let counts = pre_process_medal_counts(&raw).unwrap();

    let heatmap = country_medal_heatmap(&counts, "Italy").unwrap();

    assert_eq!(heatmap.get("Athletics", "Tokyo\n2020"), Some(2));
    assert_eq!(heatmap.get(TOTAL_LABEL, TOTAL_LABEL), Some(2));
    let uncollapsed = country_medal_heatmap(&raw, "Italy").unwrap();
    assert_eq!(uncollapsed.get(TOTAL_LABEL, TOTAL_LABEL), Some(4));
}

#[test]
fn country_heatmap_labels_break_words() {
    let heatmap = country_medal_heatmap(&italy_medals(), "Italy").unwrap();

    assert_eq!(heatmap.column_labels, vec!["Rio\n2016", "Tokyo\n2020", TOTAL_LABEL]);
    assert_eq!(heatmap.row_labels, vec!["Athletics", "Rowing", TOTAL_LABEL]);
}

#[test]
fn many_games_are_labeled_by_year() {
    let games: Vec<String> = (0..12).map(|i| format!("Games {}", 1960 + i * 4)).collect();
    let rows: Vec<(&str, &str, &str, &str, &str)> = games
        .iter()
        .map(|game| ("Kenya", "Athletics", game.as_str(), "marathon men", "Men"))
        .collect();

    let heatmap = country_medal_heatmap(&medal_frame(&rows), "Kenya").unwrap();

    assert_eq!(heatmap.column_labels[0], "1960");
    assert_eq!(heatmap.column_labels[11], "2004");
    assert_eq!(heatmap.column_labels[12], TOTAL_LABEL);
}

#[test]
fn event_heatmap_filters_all_four_keys() {
    let mut df = italy_medals();
    df.with_column(Series::new(
        "game_season".into(),
        vec!["Summer", "Summer", "Summer", "Summer", "Summer"],
    ))
    .unwrap();
    let filter = CountryEventFilter {
        country: "Italy".to_string(),
        discipline: "Athletics".to_string(),
        gender: "Men".to_string(),
        season: Season::Summer,
    };

    let heatmap = country_event_heatmap(&df, &filter).unwrap();

    assert_eq!(heatmap.row_labels, vec!["100m men", "high jump men", TOTAL_LABEL]);
    assert_eq!(heatmap.column_labels, vec!["Tokyo\n2020", TOTAL_LABEL]);
    assert_eq!(heatmap.get(TOTAL_LABEL, TOTAL_LABEL), Some(2));
}

#[test]
fn discipline_heatmap_marks_presence_by_year() {
    let df = DataFrame::new(vec![
        Series::new(
            "discipline_title".into(),
            &["Rugby Sevens", "Rugby Sevens", "Rugby Sevens", "Artistic Gymnastics", "Curling"],
        )
        .into(),
        Series::new("game_year".into(), &[1900i64, 1900, 1924, 1924, 1924]).into(),
        Series::new(
            "game_season".into(),
            &["Summer", "Summer", "Summer", "Summer", "Winter"],
        )
        .into(),
    ])
    .unwrap();

    let heatmap = discipline_game_heatmap(&df, Season::Summer).unwrap();

    assert_eq!(heatmap.column_labels, vec!["19\n00", "19\n24"]);
    assert_eq!(heatmap.row_labels, vec!["Rugby\nSevens", "Artistic\nGymnastics"]);
    assert_eq!(heatmap.get("Rugby\nSevens", "19\n00"), Some(1));
    assert_eq!(heatmap.get("Artistic\nGymnastics", "19\n00"), None);
    assert!(!heatmap.has_totals);
}

#[test]
fn saved_csv_and_json_output() {
    let heatmap = country_medal_heatmap(&italy_medals(), "Italy").unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("italy_summer_medals.csv");

    write_heatmap_csv(&heatmap, &path).unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with(",Rio 2016,Tokyo 2020,Total"));

    let json: serde_json::Value = serde_json::from_str(&heatmap_json(&heatmap).unwrap()).unwrap();
    assert_eq!(json["row_labels"][0], "Athletics");
    assert_eq!(json["cells"][1][1], serde_json::Value::Null);
    assert_eq!(json["has_totals"], true);
}

fn record_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..4, 0usize..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn totals_agree_with_body(records in prop::collection::vec(record_strategy(), 1..60)) {
        const DISCIPLINES: [&str; 4] = ["Athletics", "Fencing", "Rowing", "Swimming"];
        const GAMES: [&str; 6] = [
            "Athens 2004", "Beijing 2008", "London 2012", "Rio 2016", "Tokyo 2020", "Paris 2024",
        ];
        let rows: Vec<(&str, &str, &str, &str, &str)> = records
            .iter()
            .map(|(d, g)| ("Italy", DISCIPLINES[*d], GAMES[*g], "event", "Men"))
            .collect();

        let heatmap = country_medal_heatmap(&medal_frame(&rows), "Italy").unwrap();

        let last_row = heatmap.height() - 1;
        let last_column = heatmap.width() - 1;
        let row_totals: u64 = (0..last_row).filter_map(|r| heatmap.cell(r, last_column)).sum();
        let column_totals: u64 = (0..last_column).filter_map(|c| heatmap.cell(last_row, c)).sum();
        let grand = heatmap.cell(last_row, last_column).unwrap();

        prop_assert_eq!(row_totals, column_totals);
        prop_assert_eq!(grand, row_totals);
        prop_assert_eq!(grand, heatmap.body_sum());
        prop_assert_eq!(grand, records.len() as u64);
    }
}
