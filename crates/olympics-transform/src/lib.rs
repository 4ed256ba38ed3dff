//! Olympic Games data transformation.
//!
//! This crate turns raw dataset frames into analysis-ready tables:
//!
//! - **frame**: Column access, row filtering and duplicate removal helpers
//! - **normalization**: Canonical names and event title corrections
//! - **hosts**: Host metadata merge and host country codes
//! - **dedupe**: One row per team medal
//! - **medals**: Per-country medal views
//! - **catalog**: Dataset store wrapper exposing the derived views

pub mod catalog;
pub mod dedupe;
pub mod frame;
pub mod hosts;
pub mod medals;
pub mod normalization;

pub use catalog::GamesCatalog;
pub use dedupe::{athlete_names, pre_process_medal_counts};
pub use frame::filter_eq;
pub use hosts::{country_name_codes, hosts_with_country_codes, merge_hosts};
pub use medals::{apply_std_country_names, medals_by_country};
pub use normalization::{clean_data, normalize_event_title, title_case};
