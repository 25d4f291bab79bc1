use crate::recommendations::types::Regime;
use serde::{Deserialize, Serialize};

/// One row of the size vs. viewing-distance reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvBaseRecord {
    /// Nominal diagonal; the table's sort and search key
    pub size_inches: f64,
    /// Physical diagonal, used for screen geometry only
    pub diagonal_inches: f64,
    pub distance_4h_m: f64,
    pub distance_6h_m: f64,
    pub distance_8h_m: f64,
}

impl TvBaseRecord {
    /// Maximum comfortable viewing distance for this size under `regime`.
    pub fn max_distance_m(&self, regime: Regime) -> f64 {
        match regime {
            Regime::FourH => self.distance_4h_m,
            Regime::SixH => self.distance_6h_m,
            Regime::EightH => self.distance_8h_m,
        }
    }

    /// Linear blend towards `other`; `ratio` 0.0 yields `self`, 1.0 yields `other`.
    /// `size_inches` is set by the caller.
    pub(crate) fn lerp(&self, other: &TvBaseRecord, ratio: f64, size_inches: f64) -> TvBaseRecord {
        let mix = |a: f64, b: f64| a + ratio * (b - a);
        TvBaseRecord {
            size_inches,
            diagonal_inches: mix(self.diagonal_inches, other.diagonal_inches),
            distance_4h_m: mix(self.distance_4h_m, other.distance_4h_m),
            distance_6h_m: mix(self.distance_6h_m, other.distance_6h_m),
            distance_8h_m: mix(self.distance_8h_m, other.distance_8h_m),
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("size_inches", self.size_inches),
            ("diagonal_inches", self.diagonal_inches),
            ("distance_4h_m", self.distance_4h_m),
            ("distance_6h_m", self.distance_6h_m),
            ("distance_8h_m", self.distance_8h_m),
        ]
    }

    /// Name of the first field that is not a finite positive number.
    pub(crate) fn first_invalid_field(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(size: f64, d4: f64) -> TvBaseRecord {
        TvBaseRecord {
            size_inches: size,
            diagonal_inches: size,
            distance_4h_m: d4,
            distance_6h_m: d4 * 1.5,
            distance_8h_m: d4 * 2.0,
        }
    }

    #[test]
    fn test_max_distance_by_regime() {
        let r = row(50.0, 2.0);
        assert_eq!(r.max_distance_m(Regime::FourH), 2.0);
        assert_eq!(r.max_distance_m(Regime::SixH), 3.0);
        assert_eq!(r.max_distance_m(Regime::EightH), 4.0);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = row(40.0, 2.0).lerp(&row(50.0, 3.0), 0.5, 45.0);
        assert_eq!(mid.size_inches, 45.0);
        assert!((mid.diagonal_inches - 45.0).abs() < 1e-12);
        assert!((mid.distance_4h_m - 2.5).abs() < 1e-12);
        assert!((mid.distance_8h_m - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_invalid_field() {
        assert_eq!(row(50.0, 2.0).first_invalid_field(), None);
        assert_eq!(row(50.0, f64::NAN).first_invalid_field(), Some("distance_4h_m"));
        assert_eq!(row(-1.0, 2.0).first_invalid_field(), Some("size_inches"));
    }
}
