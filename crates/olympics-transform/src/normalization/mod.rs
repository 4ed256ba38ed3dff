//! Canonical naming for Olympic Games tables.

mod clean;
pub mod text;

pub use clean::clean_data;
pub use text::{normalize_event_title, title_case};
