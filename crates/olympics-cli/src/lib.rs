//! CLI library components for the Olympic Games reports.

pub mod logging;
pub mod render;
