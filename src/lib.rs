//! # VisionSpec
//!
//! Recommends a display size for a room from its viewing distance, using a
//! reference table of screen sizes against the farthest comfortable
//! distance for three visual-acuity regimes (4H, 6H, 8H).
//!
//! The free functions below run against a process-wide engine that loads
//! the table once (see [`config::EngineConfig::from_env`]). Build a
//! [`RecommendationEngine`] directly to work with a different table.
//!
//! ```rust,no_run
//! use visionspec_lib::{create_study, StudyInput};
//!
//! let study = create_study(StudyInput::new("HQ", "Acme", "Board room", 3.2))?;
//! for rec in &study.recommendations {
//!     println!("{}: {}\"", rec.regime, rec.recommended_size_inches);
//! }
//! # Ok::<(), visionspec_lib::EngineError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod recommendations;

pub use catalog::models::TvBaseRecord;
pub use catalog::TvCatalog;
pub use errors::{EngineError, Result};
pub use recommendations::{
    DistanceExample, RecommendationEngine, Regime, RegimeInfo, RoomDimensions, Study, StudyInput,
    StudyRecommendation,
};

/// The base table, ascending by size.
pub fn get_base_tvs() -> Result<&'static [TvBaseRecord]> {
    Ok(RecommendationEngine::global()?.base_tvs())
}

pub fn calculate_by_size(size_inches: f64) -> Result<TvBaseRecord> {
    RecommendationEngine::global()?.calculate_by_size(size_inches)
}

pub fn recommend_by_distance(viewing_distance_m: f64, regime: Regime) -> Result<StudyRecommendation> {
    RecommendationEngine::global()?.recommend_by_distance(viewing_distance_m, regime)
}

pub fn create_study(input: StudyInput) -> Result<Study> {
    RecommendationEngine::global()?.create_study(input)
}
