//! Detector geometry consumed by the projector.
//!
//! Only the parameters needed to place the detector relative to the sample are kept;
//! pixel-level bookkeeping is the caller's concern.

use serde::{Deserialize, Serialize};

/// Detector and sample tilts plus the gnomonic extent of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorGeometry {
    /// Sample tilt about the detector x axis, in degrees (typically 70°).
    pub sample_tilt: f64,
    /// Detector tilt, in degrees.
    pub tilt: f64,
    /// Largest radial distance in the gnomonic plane covered by the detector.
    pub max_gnomonic_radius: f64,
    /// Pixel grid shape (rows, columns).
    pub shape: (usize, usize),
}

impl Default for DetectorGeometry {
    fn default() -> Self {
        Self {
            sample_tilt: 70.0,
            tilt: 0.0,
            max_gnomonic_radius: 1.0,
            shape: (60, 60),
        }
    }
}

impl DetectorGeometry {
    pub fn new(sample_tilt: f64, tilt: f64, max_gnomonic_radius: f64, shape: (usize, usize)) -> Self {
        Self {
            sample_tilt,
            tilt,
            max_gnomonic_radius,
            shape,
        }
    }

    /// Geometry whose radius is the farthest corner of the gnomonic bounds
    /// `[x_min, x_max, y_min, y_max]`.
    pub fn from_gnomonic_bounds(
        sample_tilt: f64,
        tilt: f64,
        bounds: [f64; 4],
        shape: (usize, usize),
    ) -> Self {
        let [x_min, x_max, y_min, y_max] = bounds;
        let max_gnomonic_radius = [(x_min, y_min), (x_min, y_max), (x_max, y_min), (x_max, y_max)]
            .iter()
            .map(|(x, y)| x.hypot(*y))
            .fold(0.0_f64, f64::max);
        Self::new(sample_tilt, tilt, max_gnomonic_radius, shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radius_from_bounds() {
        let detector = DetectorGeometry::from_gnomonic_bounds(70.0, 0.0, [-1.0, 1.0, -0.5, 2.0], (60, 60));
        assert_relative_eq!(detector.max_gnomonic_radius, 5.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(detector.shape, (60, 60));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"sample_tilt": 70.0, "tilt": 10.0, "max_gnomonic_radius": 1.2, "shape": [480, 640]}"#;
        let detector: DetectorGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(detector, DetectorGeometry::new(70.0, 10.0, 1.2, (480, 640)));
    }
}
