//! Recommendation engine for display sizing.
//!
//! Looks up, interpolates and recommends screen sizes against the base
//! table for the three viewing regimes (4H, 6H, 8H).

pub mod engine;
pub mod geometry;
pub mod types;

pub use engine::RecommendationEngine;
pub use types::{
    DistanceExample, Regime, RegimeInfo, RoomDimensions, Study, StudyInput, StudyRecommendation,
};
