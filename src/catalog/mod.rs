//! Reference table of display sizes and their comfortable viewing distances.
//!
//! The table is parsed once, sorted ascending by `size_inches` and checked
//! for the ordering the recommendation search relies on. After construction
//! a `TvCatalog` is never mutated.

pub mod models;

use crate::config::{EngineConfig, EMBEDDED_DATASET};
use crate::errors::{EngineError, Result};
use crate::recommendations::types::Regime;
use models::TvBaseRecord;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct TvCatalog {
    records: Vec<TvBaseRecord>,
}

impl TvCatalog {
    /// Build a catalog from rows in any order.
    pub fn from_records(mut records: Vec<TvBaseRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(EngineError::Dataset("Base table is empty".to_string()));
        }

        for record in &records {
            if let Some(field) = record.first_invalid_field() {
                return Err(EngineError::Dataset(format!(
                    "Row for size {} has invalid {}",
                    record.size_inches, field
                )));
            }
        }

        // All keys are finite at this point
        records.sort_by(|a, b| a.size_inches.total_cmp(&b.size_inches));

        for pair in records.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.size_inches == next.size_inches {
                return Err(EngineError::Dataset(format!(
                    "Duplicate size {}\" in base table",
                    next.size_inches
                )));
            }
            for regime in Regime::ALL {
                if next.max_distance_m(regime) < prev.max_distance_m(regime) {
                    return Err(EngineError::Dataset(format!(
                        "{} distance decreases from {}\" ({} m) to {}\" ({} m)",
                        regime,
                        prev.size_inches,
                        prev.max_distance_m(regime),
                        next.size_inches,
                        next.max_distance_m(regime)
                    )));
                }
            }
        }

        Ok(Self { records })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<TvBaseRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::FileSystem(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// The table bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    pub fn load(config: &EngineConfig) -> Result<Self> {
        let catalog = match &config.dataset_path {
            Some(path) => {
                log::info!("Loading base table from {}", path.display());
                Self::from_path(path)?
            }
            None => {
                log::info!("Loading embedded base table");
                Self::embedded()?
            }
        };

        log::info!(
            "Base table ready: {} sizes from {}\" to {}\"",
            catalog.len(),
            catalog.smallest().size_inches,
            catalog.largest().size_inches
        );
        Ok(catalog)
    }

    /// Rows sorted ascending by size.
    pub fn records(&self) -> &[TvBaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Construction rejects empty tables, so these never index out of bounds.
    pub fn smallest(&self) -> &TvBaseRecord {
        &self.records[0]
    }

    pub fn largest(&self) -> &TvBaseRecord {
        &self.records[self.records.len() - 1]
    }
}
