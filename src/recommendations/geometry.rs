//! Screen geometry derived from a recommended size.

use crate::config::{ASPECT_HEIGHT, ASPECT_WIDTH, METERS_PER_INCH, SCREEN_MOUNT_OFFSET_M};
use crate::recommendations::types::RoomDimensions;

/// Picture height in meters of a 16:9 panel with the given diagonal.
pub fn screen_height_m(diagonal_inches: f64) -> f64 {
    let diagonal_units = ASPECT_WIDTH.hypot(ASPECT_HEIGHT);
    diagonal_inches * METERS_PER_INCH * ASPECT_HEIGHT / diagonal_units
}

pub fn round_to_millimeters(meters: f64) -> f64 {
    (meters * 1000.0).round() / 1000.0
}

/// Whether a screen mounted with its centre just above eye height stays
/// between the floor and the ceiling.
pub fn fits_ceiling(screen_height_m: f64, room: &RoomDimensions) -> bool {
    let centre = room.eye_height_m + SCREEN_MOUNT_OFFSET_M;
    let half = screen_height_m / 2.0;
    centre - half >= 0.0 && centre + half <= room.ceiling_height_m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_height_75_inch() {
        // 75" 16:9 panel is ~0.934 m tall
        assert!((screen_height_m(75.0) - 0.934).abs() < 1e-3);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_millimeters(0.93394), 0.934);
    }

    #[test]
    fn test_fits_ceiling() {
        let room = RoomDimensions {
            eye_height_m: 1.2,
            ceiling_height_m: 2.8,
        };
        assert!(fits_ceiling(0.934, &room));
        // centre at 1.5 m, a 2.8 m tall screen would reach 2.9 m
        assert!(!fits_ceiling(2.8, &room));
    }
}
