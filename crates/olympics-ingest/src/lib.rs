//! Olympic Games data ingestion.
//!
//! This crate loads the four Olympic Games CSV datasets into Polars
//! DataFrames and keeps them as an immutable in-memory snapshot.
//!
//! # Features
//!
//! - **CSV Loading**: Read one dataset file into a DataFrame
//! - **Dataset Store**: Hold hosts, medals, results and athletes; hand out copies
//! - **Profiling**: Column types and null counts for exploration
//! - **AnyValue helpers**: String conversion of cell values
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use olympics_ingest::{DatasetKind, DatasetStore};
//!
//! let store = DatasetStore::load(Path::new("data"))?;
//! let medals = store.get(DatasetKind::Medals);
//! ```

mod csv;
mod error;
mod polars_utils;
mod profile;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::read_csv_frame;

// === Dataset Store ===
pub use store::{DatasetFiles, DatasetKind, DatasetStore};

// === Profiling ===
pub use profile::{ColumnProfile, FrameProfile, profile_frame};

// === AnyValue helpers ===
pub use polars_utils::{any_to_string, any_to_string_opt};
