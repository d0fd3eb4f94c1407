// Launch records dataset
//
// Loaded once at startup from CSV and shared read-only for the process lifetime.

use crate::aggregate::SiteFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const COLUMN_LAUNCH_SITE: &str = "Launch Site";
pub const COLUMN_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COLUMN_CLASS: &str = "class";
pub const COLUMN_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Columns every dataset file must provide. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_LAUNCH_SITE,
    COLUMN_PAYLOAD_MASS,
    COLUMN_CLASS,
    COLUMN_BOOSTER_CATEGORY,
];

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("Dataset contains no records")]
    Empty,
}

/// One launch from the dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: u8,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.class == 1
    }

    fn validate(&self, row: usize) -> Result<(), DataLoadError> {
        if self.class > 1 {
            return Err(DataLoadError::InvalidRecord {
                row,
                reason: format!("class must be 0 or 1, got {}", self.class),
            });
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DataLoadError::InvalidRecord {
                row,
                reason: format!(
                    "payload mass must be a non-negative number, got {}",
                    self.payload_mass_kg
                ),
            });
        }
        Ok(())
    }
}

/// Immutable in-memory launch table with precomputed payload bounds
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        info!(target: "dataset", path = %path.display(), "Loading launch dataset");

        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;

        info!(
            target: "dataset",
            records = dataset.len(),
            sites = dataset.sites.len(),
            min_payload = dataset.min_payload,
            max_payload = dataset.max_payload,
            "Launch dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse CSV launch records from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<LaunchRecord>().enumerate() {
            let row = idx + 1;
            let record = result.map_err(|e| DataLoadError::InvalidRecord {
                row,
                reason: e.to_string(),
            })?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Build a dataset from records already in memory
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (idx, record) in records.iter().enumerate() {
            record.validate(idx + 1)?;
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        debug!(target: "dataset", records = records.len(), "Dataset validated");

        Ok(Self {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass across all rows
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass across all rows
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-seen order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Rows matching the site filter exactly (all rows for `ALL`)
    pub fn rows_for_site<'a>(
        &'a self,
        site: &'a SiteFilter,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| site.matches(&r.launch_site))
    }
}
