//! CLI argument definitions for the `olympics` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use olympics_ingest::DatasetKind;
use olympics_model::Season;

#[derive(Parser)]
#[command(
    name = "olympics",
    version,
    about = "Olympic Games medal and discipline heatmaps",
    long_about = "Load the Olympic Games hosts, medals, results and athletes datasets,\n\
                  normalize historical naming, and print pivoted heatmaps.\n\n\
                  Heatmaps can be printed as tables or JSON and saved as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing the four dataset CSV files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Which disciplines were held at which Games of a season.
    Disciplines(DisciplinesArgs),

    /// Medals of one country by discipline and Games.
    CountryMedals(CountryMedalsArgs),

    /// Medals of one country by event for a discipline and gender.
    Events(EventsArgs),

    /// Host cities with their resolved country codes.
    Hosts,

    /// Column types, null counts and first rows of a raw dataset.
    Explore(ExploreArgs),
}

/// Output options shared by the heatmap commands.
#[derive(Args)]
pub struct HeatmapOutputArgs {
    /// Print the heatmap as a table or as JSON.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also save the heatmap as CSV.
    #[arg(long = "save")]
    pub save: bool,

    /// Directory for saved files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct DisciplinesArgs {
    #[arg(long = "season", value_parser = parse_season)]
    pub season: Season,

    /// Dataset the disciplines are read from.
    #[arg(long = "source", value_enum, default_value = "results")]
    pub source: SourceArg,

    #[command(flatten)]
    pub output: HeatmapOutputArgs,
}

#[derive(Args)]
pub struct CountryMedalsArgs {
    /// Country name as it appears after normalization, e.g. "United States".
    #[arg(long = "country")]
    pub country: String,

    #[arg(long = "season", value_parser = parse_season)]
    pub season: Season,

    /// Merge predecessor and successor states (URS and RUS as Russia, ...).
    #[arg(long = "std-names")]
    pub std_names: bool,

    /// Medal table the counts are taken from.
    #[arg(long = "source", value_enum, default_value = "by-country")]
    pub source: MedalSourceArg,

    #[command(flatten)]
    pub output: HeatmapOutputArgs,
}

#[derive(Args)]
pub struct EventsArgs {
    #[arg(long = "country")]
    pub country: String,

    #[arg(long = "discipline")]
    pub discipline: String,

    /// Event gender as recorded in the medals table (Men, Women, Mixed, Open).
    #[arg(long = "gender")]
    pub gender: String,

    #[arg(long = "season", value_parser = parse_season)]
    pub season: Season,

    /// Medal table the counts are taken from.
    #[arg(long = "source", value_enum, default_value = "by-country")]
    pub source: MedalSourceArg,

    #[command(flatten)]
    pub output: HeatmapOutputArgs,
}

#[derive(Args)]
pub struct ExploreArgs {
    #[arg(value_name = "DATASET", value_parser = parse_dataset)]
    pub dataset: DatasetKind,

    /// Number of rows to preview.
    #[arg(long = "rows", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Results,
    Medals,
}

/// `by-country` counts one medal per country and event; `counts` counts one
/// row per athlete medal or collapsed team medal.
#[derive(Clone, Copy, ValueEnum)]
pub enum MedalSourceArg {
    ByCountry,
    Counts,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_season(value: &str) -> Result<Season, String> {
    value.parse()
}

fn parse_dataset(value: &str) -> Result<DatasetKind, String> {
    value.parse().map_err(|error: olympics_ingest::IngestError| error.to_string())
}
