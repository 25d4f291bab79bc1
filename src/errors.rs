//! Typed errors for the recommendation engine.
//!
//! Uses `thiserror` for the definitions and implements `Serialize` so errors
//! can be handed to a report or HTTP layer unchanged.

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum EngineError {
    /// Requested size lies outside the tabulated span
    #[error("Size {size_inches}\" is outside the supported range ({min_inches}\" to {max_inches}\")")]
    OutOfRange {
        size_inches: f64,
        min_inches: f64,
        max_inches: f64,
    },

    /// Numeric input the engine cannot reason about (NaN, infinity, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Base table failed to parse or violates its ordering invariants
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("File system error: {0}")]
    FileSystem(String),
}

impl EngineError {
    /// Helper for rejecting a non-finite numeric argument.
    pub(crate) fn non_finite(field: &str, value: f64) -> Self {
        EngineError::InvalidInput(format!("{} must be a finite number, got {}", field, value))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::FileSystem(e.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Dataset(format!("Malformed base table: {}", e))
    }
}
