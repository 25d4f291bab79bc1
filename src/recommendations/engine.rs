//! Recommendation engine implementation.
//!
//! Answers three questions against the immutable base table:
//! 1. What does a size that isn't tabulated look like? (linear interpolation)
//! 2. What is the smallest screen that covers a viewing distance under a regime?
//! 3. What are the three regime recommendations for a room? (a study)
//!
//! Every operation is pure apart from `create_study`, which reads the clock
//! and draws a random study id.

use crate::catalog::models::TvBaseRecord;
use crate::catalog::TvCatalog;
use crate::config::{EngineConfig, SAMPLE_DISTANCES_M};
use crate::errors::{EngineError, Result};
use crate::recommendations::geometry::{fits_ceiling, round_to_millimeters, screen_height_m};
use crate::recommendations::types::{
    DistanceExample, Regime, Study, StudyInput, StudyRecommendation,
};
use chrono::Utc;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// Process-wide engine, loaded on first use.
static GLOBAL_ENGINE: OnceLock<Result<RecommendationEngine>> = OnceLock::new();

/// Engine for display size recommendations.
///
/// Cheap to clone; clones share the same read-only table, so an engine can
/// be handed to any number of threads.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<TvCatalog>,
}

impl RecommendationEngine {
    pub fn new(catalog: TvCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::new(TvCatalog::load(config)?))
    }

    /// The shared engine, built from `EngineConfig::from_env()` the first
    /// time it is requested. A table that failed to load keeps failing with
    /// the same error.
    pub fn global() -> Result<&'static RecommendationEngine> {
        GLOBAL_ENGINE
            .get_or_init(|| {
                let engine = Self::from_config(&EngineConfig::from_env());
                if let Err(e) = &engine {
                    log::error!("Base table failed to load: {}", e);
                }
                engine
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn catalog(&self) -> &TvCatalog {
        &self.catalog
    }

    /// Full table, ascending by size.
    pub fn base_tvs(&self) -> &[TvBaseRecord] {
        self.catalog.records()
    }

    /// Row for an arbitrary size: the stored row on an exact match, otherwise
    /// a linear blend of the two neighbouring rows.
    pub fn calculate_by_size(&self, size_inches: f64) -> Result<TvBaseRecord> {
        if !size_inches.is_finite() {
            return Err(EngineError::non_finite("size_inches", size_inches));
        }

        let records = self.catalog.records();
        let idx = records.partition_point(|r| r.size_inches < size_inches);

        if let Some(exact) = records.get(idx).filter(|r| r.size_inches == size_inches) {
            return Ok(*exact);
        }

        if idx == 0 || idx == records.len() {
            return Err(EngineError::OutOfRange {
                size_inches,
                min_inches: self.catalog.smallest().size_inches,
                max_inches: self.catalog.largest().size_inches,
            });
        }

        let smaller = &records[idx - 1];
        let bigger = &records[idx];
        let ratio = (size_inches - smaller.size_inches) / (bigger.size_inches - smaller.size_inches);

        log::debug!(
            "Interpolating {}\" between {}\" and {}\" (ratio {:.3})",
            size_inches,
            smaller.size_inches,
            bigger.size_inches,
            ratio
        );

        Ok(smaller.lerp(bigger, ratio, size_inches))
    }

    /// Smallest tabulated size whose `regime` distance covers
    /// `viewing_distance_m`.
    ///
    /// Never fails for a long distance: when even the largest screen falls
    /// short it is recommended anyway with `within_spec = false`.
    pub fn recommend_by_distance(
        &self,
        viewing_distance_m: f64,
        regime: Regime,
    ) -> Result<StudyRecommendation> {
        if !viewing_distance_m.is_finite() {
            return Err(EngineError::non_finite("viewing_distance_m", viewing_distance_m));
        }

        let records = self.catalog.records();
        // Distance columns are non-decreasing in size (checked at load), so
        // the first qualifying row is a partition point.
        let idx = records.partition_point(|r| r.max_distance_m(regime) < viewing_distance_m);

        let row = match records.get(idx) {
            Some(row) => row,
            None => {
                let largest = self.catalog.largest();
                log::warn!(
                    "{} m exceeds every {} distance; falling back to {}\"",
                    viewing_distance_m,
                    regime,
                    largest.size_inches
                );
                largest
            }
        };

        let max_distance_m = row.max_distance_m(regime);
        let recommendation = StudyRecommendation {
            regime,
            recommended_size_inches: row.size_inches,
            recommended_diagonal_inches: row.diagonal_inches,
            max_distance_m,
            within_spec: viewing_distance_m <= max_distance_m,
            screen_height_m: round_to_millimeters(screen_height_m(row.diagonal_inches)),
            fits_ceiling: None,
        };

        log::debug!(
            "{} at {} m -> {}\" (max {:.3} m, within spec: {})",
            regime,
            viewing_distance_m,
            recommendation.recommended_size_inches,
            max_distance_m,
            recommendation.within_spec
        );

        Ok(recommendation)
    }

    /// One recommendation per regime, in `Regime::ALL` order.
    pub fn recommend_all(&self, viewing_distance_m: f64) -> Result<Vec<StudyRecommendation>> {
        Regime::ALL
            .iter()
            .map(|&regime| self.recommend_by_distance(viewing_distance_m, regime))
            .collect()
    }

    pub fn create_study(&self, input: StudyInput) -> Result<Study> {
        let mut recommendations = self.recommend_all(input.viewing_distance_m)?;

        if let Some(room) = &input.room {
            if !room.eye_height_m.is_finite() {
                return Err(EngineError::non_finite("eye_height_m", room.eye_height_m));
            }
            if !room.ceiling_height_m.is_finite() {
                return Err(EngineError::non_finite("ceiling_height_m", room.ceiling_height_m));
            }
            for rec in &mut recommendations {
                let height = screen_height_m(rec.recommended_diagonal_inches);
                rec.fits_ceiling = Some(fits_ceiling(height, room));
            }
        }

        let study = Study {
            id: Uuid::new_v4(),
            project_name: input.project_name,
            client_name: input.client_name,
            room_name: input.room_name,
            viewing_distance_m: input.viewing_distance_m,
            room: input.room,
            recommendations,
            generated_at: Utc::now(),
        };

        log::info!(
            "Created study {} for '{}' at {} m",
            study.id,
            study.room_name,
            study.viewing_distance_m
        );

        Ok(study)
    }

    /// Recommendations for a fixed set of sample distances.
    pub fn sample_grid(&self) -> Result<Vec<DistanceExample>> {
        SAMPLE_DISTANCES_M
            .iter()
            .map(|&distance_m| {
                Ok(DistanceExample {
                    distance_m,
                    recommendations: self.recommend_all(distance_m)?,
                })
            })
            .collect()
    }
}
