//! Data types for the recommendation engine.

use crate::config::DEFAULT_CEILING_HEIGHT_M;
use crate::errors::{EngineError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Visual-acuity viewing standard: the farthest comfortable seat is
/// N picture heights away from the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    #[serde(rename = "4H")]
    FourH,
    #[serde(rename = "6H")]
    SixH,
    #[serde(rename = "8H")]
    EightH,
}

impl Regime {
    /// Report order; every study lists its recommendations in this order.
    pub const ALL: [Regime; 3] = [Regime::FourH, Regime::SixH, Regime::EightH];

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::FourH => "4H",
            Regime::SixH => "6H",
            Regime::EightH => "8H",
        }
    }

    /// Picture heights between the screen and the farthest viewer.
    pub fn height_multiple(&self) -> u32 {
        match self {
            Regime::FourH => 4,
            Regime::SixH => 6,
            Regime::EightH => 8,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Regime::FourH => "Detailed viewing",
            Regime::SixH => "Presentation content",
            Regime::EightH => "Video content",
        }
    }
}

/// Report legend entry for a regime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeInfo {
    pub regime: Regime,
    pub height_multiple: u32,
    pub description: &'static str,
}

impl From<Regime> for RegimeInfo {
    fn from(regime: Regime) -> Self {
        Self {
            regime,
            height_multiple: regime.height_multiple(),
            description: regime.description(),
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Regime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "4H" => Ok(Regime::FourH),
            "6H" => Ok(Regime::SixH),
            "8H" => Ok(Regime::EightH),
            other => Err(EngineError::InvalidInput(format!(
                "Unknown regime '{}', expected 4H, 6H or 8H",
                other
            ))),
        }
    }
}

fn default_ceiling_height() -> f64 {
    DEFAULT_CEILING_HEIGHT_M
}

/// Vertical room measurements used for the ceiling-fit check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Seated viewer's eye height above the floor
    pub eye_height_m: f64,
    #[serde(default = "default_ceiling_height")]
    pub ceiling_height_m: f64,
}

impl RoomDimensions {
    pub fn new(eye_height_m: f64) -> Self {
        Self {
            eye_height_m,
            ceiling_height_m: DEFAULT_CEILING_HEIGHT_M,
        }
    }
}

/// Form data for a study. Names are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyInput {
    pub project_name: String,
    pub client_name: String,
    pub room_name: String,
    pub viewing_distance_m: f64,
    #[serde(default)]
    pub room: Option<RoomDimensions>,
}

impl StudyInput {
    pub fn new(
        project_name: impl Into<String>,
        client_name: impl Into<String>,
        room_name: impl Into<String>,
        viewing_distance_m: f64,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            client_name: client_name.into(),
            room_name: room_name.into(),
            viewing_distance_m,
            room: None,
        }
    }

    pub fn with_room(mut self, room: RoomDimensions) -> Self {
        self.room = Some(room);
        self
    }

    /// Boundary checks for form input. The engine does not call this; it is
    /// meant for whatever layer receives user data.
    pub fn validate(&self) -> Result<()> {
        require_positive("viewing_distance_m", self.viewing_distance_m)?;

        if let Some(room) = &self.room {
            require_positive("eye_height_m", room.eye_height_m)?;
            require_positive("ceiling_height_m", room.ceiling_height_m)?;
            if room.eye_height_m >= room.ceiling_height_m {
                return Err(EngineError::InvalidInput(format!(
                    "eye_height_m ({}) must be below ceiling_height_m ({})",
                    room.eye_height_m, room.ceiling_height_m
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EngineError::non_finite(field, value));
    }
    if value <= 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "{} must be greater than zero, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Recommended display for one regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecommendation {
    pub regime: Regime,
    pub recommended_size_inches: f64,
    pub recommended_diagonal_inches: f64,
    /// Farthest comfortable distance for the recommended size
    pub max_distance_m: f64,
    pub within_spec: bool,
    /// Physical 16:9 picture height
    pub screen_height_m: f64,
    /// `None` when the study carries no room dimensions
    pub fits_ceiling: Option<bool>,
}

/// Engine output: the input echoed back with one recommendation per regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub id: Uuid,
    pub project_name: String,
    pub client_name: String,
    pub room_name: String,
    pub viewing_distance_m: f64,
    pub room: Option<RoomDimensions>,
    pub recommendations: Vec<StudyRecommendation>,
    pub generated_at: DateTime<Utc>,
}

impl Study {
    pub fn recommendation(&self, regime: Regime) -> Option<&StudyRecommendation> {
        self.recommendations.iter().find(|r| r.regime == regime)
    }

    /// Whether every regime could be satisfied by some tabulated size.
    pub fn all_within_spec(&self) -> bool {
        self.recommendations.iter().all(|r| r.within_spec)
    }
}

/// Recommendations for one distance of the example grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceExample {
    pub distance_m: f64,
    pub recommendations: Vec<StudyRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_order_is_fixed() {
        assert_eq!(Regime::ALL, [Regime::FourH, Regime::SixH, Regime::EightH]);
        let multiples: Vec<u32> = Regime::ALL.iter().map(|r| r.height_multiple()).collect();
        assert_eq!(multiples, vec![4, 6, 8]);
    }

    #[test]
    fn test_regime_parse_and_display() {
        assert_eq!("6h".parse::<Regime>().unwrap(), Regime::SixH);
        assert_eq!(" 8H ".parse::<Regime>().unwrap(), Regime::EightH);
        assert!("10H".parse::<Regime>().is_err());
        assert_eq!(Regime::FourH.to_string(), "4H");
        assert_eq!(Regime::EightH.description(), "Video content");
    }

    #[test]
    fn test_regime_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Regime::SixH).unwrap(), "\"6H\"");
        let parsed: Regime = serde_json::from_str("\"4H\"").unwrap();
        assert_eq!(parsed, Regime::FourH);
    }

    #[test]
    fn test_room_defaults_ceiling_height() {
        let room: RoomDimensions = serde_json::from_str(r#"{"eye_height_m": 1.2}"#).unwrap();
        assert_eq!(room.ceiling_height_m, DEFAULT_CEILING_HEIGHT_M);
    }

    #[test]
    fn test_validate_accepts_well_formed_input() {
        let input = StudyInput::new("Proj", "Client", "Room", 3.2).with_room(RoomDimensions::new(1.2));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_distance() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let input = StudyInput::new("P", "C", "R", bad);
            assert!(matches!(input.validate(), Err(EngineError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_validate_rejects_eye_above_ceiling() {
        let input = StudyInput::new("P", "C", "R", 3.0).with_room(RoomDimensions {
            eye_height_m: 3.0,
            ceiling_height_m: 2.5,
        });
        assert!(input.validate().is_err());
    }
}
