//! In-memory store of the four Olympic Games datasets.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::csv::read_csv_frame;
use crate::error::{IngestError, Result};

/// One of the four source datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Hosts,
    Medals,
    Results,
    Athletes,
}

impl DatasetKind {
    /// All datasets in load order.
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Hosts,
        DatasetKind::Medals,
        DatasetKind::Results,
        DatasetKind::Athletes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Hosts => "hosts",
            DatasetKind::Medals => "medals",
            DatasetKind::Results => "results",
            DatasetKind::Athletes => "athletes",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = IngestError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hosts" => Ok(DatasetKind::Hosts),
            "medals" => Ok(DatasetKind::Medals),
            "results" => Ok(DatasetKind::Results),
            "athletes" => Ok(DatasetKind::Athletes),
            _ => Err(IngestError::UnknownDataset {
                name: s.to_string(),
            }),
        }
    }
}

/// File names of the datasets inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFiles {
    pub hosts: String,
    pub medals: String,
    pub results: String,
    pub athletes: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            hosts: "olympic_hosts.csv".to_string(),
            medals: "olympic_medals.csv".to_string(),
            results: "olympic_results.csv".to_string(),
            athletes: "olympic_athletes.csv".to_string(),
        }
    }
}

impl DatasetFiles {
    /// File name for one dataset.
    pub fn file_name(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Hosts => &self.hosts,
            DatasetKind::Medals => &self.medals,
            DatasetKind::Results => &self.results,
            DatasetKind::Athletes => &self.athletes,
        }
    }
}

/// Immutable snapshot of the four datasets.
///
/// Accessors return copies; nothing downstream mutates the snapshot.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    data_dir: PathBuf,
    hosts: DataFrame,
    medals: DataFrame,
    results: DataFrame,
    athletes: DataFrame,
}

impl DatasetStore {
    /// Load all four datasets from `data_dir` using the default file names.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with_files(data_dir, &DatasetFiles::default())
    }

    /// Load all four datasets from `data_dir` using custom file names.
    pub fn load_with_files(data_dir: &Path, files: &DatasetFiles) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: data_dir.to_path_buf(),
            });
        }
        let read = |kind: DatasetKind| read_csv_frame(&data_dir.join(files.file_name(kind)));
        let store = Self {
            data_dir: data_dir.to_path_buf(),
            hosts: read(DatasetKind::Hosts)?,
            medals: read(DatasetKind::Medals)?,
            results: read(DatasetKind::Results)?,
            athletes: read(DatasetKind::Athletes)?,
        };
        info!(
            data_dir = %data_dir.display(),
            hosts = store.hosts.height(),
            medals = store.medals.height(),
            results = store.results.height(),
            athletes = store.athletes.height(),
            "data loaded"
        );
        Ok(store)
    }

    /// Build a store from frames already in memory.
    pub fn from_frames(
        hosts: DataFrame,
        medals: DataFrame,
        results: DataFrame,
        athletes: DataFrame,
    ) -> Self {
        Self {
            data_dir: PathBuf::new(),
            hosts,
            medals,
            results,
            athletes,
        }
    }

    /// Directory the datasets were loaded from (empty for in-memory stores).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// A copy of one dataset.
    pub fn get(&self, kind: DatasetKind) -> DataFrame {
        self.frame(kind).clone()
    }

    /// Borrow one dataset without copying.
    pub fn frame(&self, kind: DatasetKind) -> &DataFrame {
        match kind {
            DatasetKind::Hosts => &self.hosts,
            DatasetKind::Medals => &self.medals,
            DatasetKind::Results => &self.results,
            DatasetKind::Athletes => &self.athletes,
        }
    }

    pub fn hosts(&self) -> DataFrame {
        self.get(DatasetKind::Hosts)
    }

    pub fn medals(&self) -> DataFrame {
        self.get(DatasetKind::Medals)
    }

    pub fn results(&self) -> DataFrame {
        self.get(DatasetKind::Results)
    }

    pub fn athletes(&self) -> DataFrame {
        self.get(DatasetKind::Athletes)
    }
}
