use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use olympics_cli::render::{OutputFormat, TerminalRenderer, frame_table, profile_table};
use olympics_ingest::{DatasetStore, profile_frame};
use olympics_model::columns::GAME_SEASON;
use olympics_report::{
    CountryEventFilter, Heatmap, HeatmapRenderer, country_event_heatmap, country_medal_heatmap,
    discipline_game_heatmap,
};
use olympics_transform::{GamesCatalog, apply_std_country_names, filter_eq};
use polars::prelude::DataFrame;

use crate::cli::{
    CountryMedalsArgs, DisciplinesArgs, EventsArgs, ExploreArgs, HeatmapOutputArgs,
    MedalSourceArg, OutputFormatArg, SourceArg,
};

fn load_catalog(data_dir: &Path) -> Result<GamesCatalog> {
    let store = DatasetStore::load(data_dir)
        .with_context(|| format!("load datasets from {}", data_dir.display()))?;
    Ok(GamesCatalog::new(store))
}

fn medal_table(catalog: &GamesCatalog, source: MedalSourceArg, std_names: bool) -> Result<DataFrame> {
    match (source, std_names) {
        (MedalSourceArg::ByCountry, false) => catalog.medals_by_country(),
        (MedalSourceArg::ByCountry, true) => catalog.medals_by_std_country_name(),
        (MedalSourceArg::Counts, std_names) => {
            let mut df = catalog.medal_counts()?;
            if std_names {
                apply_std_country_names(&mut df)?;
            }
            Ok(df)
        }
    }
}

fn render(heatmap: &Heatmap, title: &str, suffix: &str, output: &HeatmapOutputArgs) -> Result<()> {
    let format = match output.format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    if heatmap.is_empty() {
        warn!(title, "no records match, heatmap is empty");
    }
    let mut renderer = TerminalRenderer::new(&output.output_dir, format, suffix);
    if let Some(path) = renderer.render(heatmap, title, output.save)? {
        info!(path = %path.display(), "heatmap written");
        eprintln!("saved {}", path.display());
    }
    Ok(())
}

pub fn run_disciplines(data_dir: &Path, args: &DisciplinesArgs) -> Result<()> {
    let span = info_span!("disciplines", season = %args.season);
    let _guard = span.enter();

    let catalog = load_catalog(data_dir)?;
    let df = match args.source {
        SourceArg::Results => catalog.results_merged()?,
        SourceArg::Medals => catalog.medals_merged()?,
    };
    let heatmap = discipline_game_heatmap(&df, args.season)?;
    render(&heatmap, args.season.as_str(), "games", &args.output)
}

pub fn run_country_medals(data_dir: &Path, args: &CountryMedalsArgs) -> Result<()> {
    let span = info_span!("country_medals", country = %args.country, season = %args.season);
    let _guard = span.enter();

    let catalog = load_catalog(data_dir)?;
    let medals = medal_table(&catalog, args.source, args.std_names)?;
    let season_medals = filter_eq(&medals, &[(GAME_SEASON, args.season.as_str())])?;
    let heatmap = country_medal_heatmap(&season_medals, &args.country)?;
    let title = format!("{} {}", args.country, args.season);
    render(&heatmap, &title, "medals", &args.output)
}

pub fn run_events(data_dir: &Path, args: &EventsArgs) -> Result<()> {
    let span = info_span!(
        "events",
        country = %args.country,
        discipline = %args.discipline,
        gender = %args.gender
    );
    let _guard = span.enter();

    let catalog = load_catalog(data_dir)?;
    let medals = medal_table(&catalog, args.source, false)?;
    let filter = CountryEventFilter {
        country: args.country.clone(),
        discipline: args.discipline.clone(),
        gender: args.gender.clone(),
        season: args.season,
    };
    let heatmap = country_event_heatmap(&medals, &filter)?;
    let title = format!(
        "{} {} {} {}",
        args.country, args.discipline, args.gender, args.season
    );
    render(&heatmap, &title, "events", &args.output)
}

pub fn run_hosts(data_dir: &Path) -> Result<()> {
    let span = info_span!("hosts");
    let _guard = span.enter();

    let catalog = load_catalog(data_dir)?;
    let hosts = catalog.hosts_with_country_codes()?;
    println!("{}", frame_table(&hosts, hosts.height()));
    Ok(())
}

pub fn run_explore(data_dir: &Path, args: &ExploreArgs) -> Result<()> {
    let span = info_span!("explore", dataset = %args.dataset);
    let _guard = span.enter();

    let store = DatasetStore::load(data_dir)
        .with_context(|| format!("load datasets from {}", data_dir.display()))?;
    let df = store.frame(args.dataset);
    let profile = profile_frame(df);
    println!("{} rows, {} columns", profile.rows, profile.columns.len());
    let missing: Vec<&str> = profile
        .columns_with_nulls()
        .map(|column| column.name.as_str())
        .collect();
    if missing.is_empty() {
        println!("no missing values");
    } else {
        println!("missing values in: {}", missing.join(", "));
    }
    println!("{}", profile_table(&profile));
    println!("{}", frame_table(df, args.rows));
    Ok(())
}
