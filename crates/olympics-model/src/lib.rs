//! Olympic Games data model definitions.
//!
//! - **columns**: column names shared with the source CSV files
//! - **enums**: typed seasons, participant types and medal types
//! - **reference**: static lookup tables for historical label reconciliation

pub mod columns;
pub mod enums;
pub mod reference;

pub use enums::{MedalType, ParticipantType, Season};
pub use reference::{
    ReferenceMap, country_code_map, country_name_map, discipline_title_map, host_location_fixes,
};
