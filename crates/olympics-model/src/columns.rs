//! Column names used by the Olympic Games CSV datasets.
//!
//! These names are the interface with the source files. Optional-column
//! checks in the normalizer compare against them exactly, so renaming a
//! column in the input breaks the corresponding cleanup step.

// ============================================================================
// RECORD COLUMNS (medals, results, athletes)
// ============================================================================

/// Foreign key into the hosts table.
pub const SLUG_GAME: &str = "slug_game";
pub const DISCIPLINE_TITLE: &str = "discipline_title";
pub const EVENT_TITLE: &str = "event_title";
pub const EVENT_GENDER: &str = "event_gender";
/// Null for results without a medal.
pub const MEDAL_TYPE: &str = "medal_type";
pub const PARTICIPANT_TYPE: &str = "participant_type";
pub const PARTICIPANT_TITLE: &str = "participant_title";
/// Null for team medals recorded without an athlete list.
pub const ATHLETE_FULL_NAME: &str = "athlete_full_name";
pub const ATHLETE_URL: &str = "athlete_url";
pub const COUNTRY_CODE: &str = "country_code";
pub const COUNTRY_3_LETTER_CODE: &str = "country_3_letter_code";
pub const COUNTRY_NAME: &str = "country_name";

// ============================================================================
// HOST COLUMNS
// ============================================================================

/// Unique key of the hosts table.
pub const GAME_SLUG: &str = "game_slug";
pub const GAME_NAME: &str = "game_name";
pub const GAME_YEAR: &str = "game_year";
pub const GAME_SEASON: &str = "game_season";
pub const GAME_LOCATION: &str = "game_location";
pub const GAME_START_DATE: &str = "game_start_date";
pub const GAME_END_DATE: &str = "game_end_date";

// ============================================================================
// DERIVED COLUMNS
// ============================================================================

/// Host country code resolved from `game_location`.
pub const GAME_COUNTRY_CODE: &str = "game_country_code";

/// Columns identifying one team medal, used to collapse per-athlete rows.
pub const TEAM_MEDAL_KEY: [&str; 12] = [
    DISCIPLINE_TITLE,
    EVENT_TITLE,
    EVENT_GENDER,
    MEDAL_TYPE,
    PARTICIPANT_TYPE,
    PARTICIPANT_TITLE,
    COUNTRY_NAME,
    COUNTRY_3_LETTER_CODE,
    GAME_LOCATION,
    GAME_SEASON,
    GAME_NAME,
    GAME_YEAR,
];

/// Columns identifying one medal per country, ignoring team members.
pub const COUNTRY_MEDAL_KEY: [&str; 7] = [
    DISCIPLINE_TITLE,
    SLUG_GAME,
    EVENT_TITLE,
    EVENT_GENDER,
    MEDAL_TYPE,
    PARTICIPANT_TYPE,
    COUNTRY_3_LETTER_CODE,
];

/// Per-participant columns dropped from the medals-by-country view.
pub const PARTICIPANT_DETAIL_COLUMNS: [&str; 4] = [
    PARTICIPANT_TITLE,
    ATHLETE_URL,
    ATHLETE_FULL_NAME,
    COUNTRY_CODE,
];
