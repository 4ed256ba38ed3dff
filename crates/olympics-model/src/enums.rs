//! Type-safe enumerations for Olympic Games categories.
//!
//! The source files store these as plain strings. Parsing is
//! case-insensitive; `as_str` returns the spelling used in the datasets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Olympic Games season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Returns the value as it appears in `game_season`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SUMMER" => Ok(Season::Summer),
            "WINTER" => Ok(Season::Winter),
            _ => Err(format!("Unknown season: {s}")),
        }
    }
}

/// Who was awarded a result.
///
/// Team events are recorded one row per athlete with `GameTeam`, which is
/// why medal counts need deduplication before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantType {
    /// An individual athlete.
    Athlete,
    /// A multi-person team.
    GameTeam,
}

impl ParticipantType {
    /// Returns the value as it appears in `participant_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantType::Athlete => "Athlete",
            ParticipantType::GameTeam => "GameTeam",
        }
    }
}

impl fmt::Display for ParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParticipantType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ATHLETE" => Ok(ParticipantType::Athlete),
            "GAMETEAM" => Ok(ParticipantType::GameTeam),
            _ => Err(format!("Unknown participant type: {s}")),
        }
    }
}

/// Medal awarded for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedalType {
    Gold,
    Silver,
    Bronze,
}

impl MedalType {
    /// Returns the value as it appears in `medal_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalType::Gold => "GOLD",
            MedalType::Silver => "SILVER",
            MedalType::Bronze => "BRONZE",
        }
    }
}

impl fmt::Display for MedalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MedalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOLD" => Ok(MedalType::Gold),
            "SILVER" => Ok(MedalType::Silver),
            "BRONZE" => Ok(MedalType::Bronze),
            _ => Err(format!("Unknown medal type: {s}")),
        }
    }
}
