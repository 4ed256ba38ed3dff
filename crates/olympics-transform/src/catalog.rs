//! Derived views over the dataset store.

use anyhow::Result;
use polars::prelude::DataFrame;

use olympics_ingest::{DatasetKind, DatasetStore};

use crate::dedupe::pre_process_medal_counts;
use crate::hosts::{country_name_codes, hosts_with_country_codes, merge_hosts};
use crate::medals::{apply_std_country_names, medals_by_country};
use crate::normalization::clean_data;

/// Entry point for analysis-ready tables.
///
/// Every method works on a fresh copy of the stored data, so calls can be
/// repeated in any order.
#[derive(Debug, Clone)]
pub struct GamesCatalog {
    store: DatasetStore,
}

impl GamesCatalog {
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn hosts(&self) -> DataFrame {
        self.store.hosts()
    }

    pub fn medals(&self) -> DataFrame {
        self.store.medals()
    }

    pub fn results(&self) -> DataFrame {
        self.store.results()
    }

    pub fn athletes(&self) -> DataFrame {
        self.store.athletes()
    }

    /// Host-merged and normalized copy of one record dataset.
    pub fn merged(&self, kind: DatasetKind) -> Result<DataFrame> {
        let mut df = merge_hosts(self.store.frame(kind), self.store.frame(DatasetKind::Hosts))?;
        clean_data(&mut df)?;
        Ok(df)
    }

    pub fn medals_merged(&self) -> Result<DataFrame> {
        self.merged(DatasetKind::Medals)
    }

    pub fn results_merged(&self) -> Result<DataFrame> {
        self.merged(DatasetKind::Results)
    }

    pub fn athletes_merged(&self) -> Result<DataFrame> {
        self.merged(DatasetKind::Athletes)
    }

    /// Merged medals with team medals collapsed to one row.
    pub fn medal_counts(&self) -> Result<DataFrame> {
        pre_process_medal_counts(&self.medals_merged()?)
    }

    pub fn medals_by_country(&self) -> Result<DataFrame> {
        medals_by_country(&self.medals_merged()?)
    }

    /// Medals by country with dissolved and successor states merged.
    pub fn medals_by_std_country_name(&self) -> Result<DataFrame> {
        let mut df = self.medals_by_country()?;
        apply_std_country_names(&mut df)?;
        Ok(df)
    }

    pub fn country_name_codes(&self) -> Result<Vec<(String, String)>> {
        country_name_codes(&self.medals_by_country()?)
    }

    pub fn hosts_with_country_codes(&self) -> Result<DataFrame> {
        let codes = self.country_name_codes()?;
        hosts_with_country_codes(self.store.frame(DatasetKind::Hosts), &codes)
    }
}
