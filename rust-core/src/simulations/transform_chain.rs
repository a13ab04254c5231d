//! Composition of the detector ← sample ← crystal frame rotations.
//!
//! All transforms act on row vectors: `v_detector = v_index · (B · U_o · U_s)` where
//! `B` is the basis change from crystal indices to the cartesian crystal frame,
//! `U_o` the orientation (cartesian crystal → sample) and `U_s` the sample → detector
//! rotation built from the tilts.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use ndarray::ArrayD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SAMPLE_DETECTOR_OFFSET_DEG;
use crate::crystal::{OrientationBatch, Phase};
use crate::detector::DetectorGeometry;
use crate::interfaces::Space;
use crate::simulations::arrays::navigation_array;

/// Axis of the combined sample/detector tilt rotation.
pub const TILT_AXIS: [f64; 3] = [-1.0, 0.0, 0.0];
/// Axis of the fixed in-plane rotation between the sample and detector conventions.
pub const IN_PLANE_AXIS: [f64; 3] = [0.0, 0.0, -1.0];
/// Angle of the fixed in-plane rotation.
pub const IN_PLANE_ANGLE: f64 = -FRAC_PI_2;

fn axis_angle(axis: [f64; 3], angle: f64) -> Matrix3<f64> {
    let axis = Unit::new_normalize(Vector3::from(axis));
    *Rotation3::from_axis_angle(&axis, angle).matrix()
}

/// Rotation from the detector frame to the sample frame, `U_s`.
///
/// The total tilt is `sample_tilt − 90° − detector_tilt`, applied about `TILT_AXIS`,
/// preceded by the fixed in-plane rotation.
pub fn sample_to_detector(sample_tilt: f64, detector_tilt: f64) -> Matrix3<f64> {
    let total_tilt = (sample_tilt - SAMPLE_DETECTOR_OFFSET_DEG - detector_tilt).to_radians();
    axis_angle(IN_PLANE_AXIS, IN_PLANE_ANGLE) * axis_angle(TILT_AXIS, total_tilt)
}

/// Basis change from crystal indices to the cartesian crystal frame, as a row-vector transform.
pub fn basis_change(phase: &Phase, space: Space) -> Matrix3<f64> {
    match space {
        Space::Reciprocal => phase.reciprocal_basis().row_basis(),
        Space::Real => phase.direct_basis().row_basis(),
    }
}

/// One composite row-vector transform per orientation, keeping the navigation shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchedTransform {
    space: Space,
    shape: Vec<usize>,
    matrices: Vec<Matrix3<f64>>,
}

impl BatchedTransform {
    /// Compose `B · U_o,i · U_s` for every orientation.
    pub fn compose(
        space: Space,
        phase: &Phase,
        orientations: &OrientationBatch,
        detector: &DetectorGeometry,
    ) -> Self {
        let tilt = sample_to_detector(detector.sample_tilt, detector.tilt);
        Self::from_parts(space, &basis_change(phase, space), orientations, &tilt)
    }

    pub fn from_parts(
        space: Space,
        basis_change: &Matrix3<f64>,
        orientations: &OrientationBatch,
        sample_to_detector: &Matrix3<f64>,
    ) -> Self {
        let matrices = orientations
            .matrices()
            .iter()
            .map(|u_o| basis_change * u_o * sample_to_detector)
            .collect();
        Self {
            space,
            shape: orientations.navigation_shape().to_vec(),
            matrices,
        }
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn navigation_shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn matrices(&self) -> &[Matrix3<f64>] {
        &self.matrices
    }

    /// Transforms as an array of shape `(navigation..., 3, 3)`.
    pub fn to_array(&self) -> ArrayD<f64> {
        let data = self
            .matrices
            .iter()
            .flat_map(|m| (0..3).flat_map(move |i| (0..3).map(move |j| m[(i, j)])))
            .collect();
        navigation_array(&self.shape, &[3, 3], data)
    }

    /// Third detector coordinate of every vector for every orientation, row-major `(M, N)`.
    pub fn project_z(&self, vectors: &[Vector3<f64>]) -> Vec<f64> {
        let project = |m: &Matrix3<f64>| -> Vec<f64> {
            let column = m.column(2);
            vectors.iter().map(|v| v.dot(&column)).collect()
        };

        #[cfg(feature = "parallel")]
        let per_orientation: Vec<Vec<f64>> = self.matrices.par_iter().map(project).collect();
        #[cfg(not(feature = "parallel"))]
        let per_orientation: Vec<Vec<f64>> = self.matrices.iter().map(project).collect();

        per_orientation.concat()
    }

    /// Detector coordinates of every vector for every orientation, row-major `(M, N)`.
    pub fn project(&self, vectors: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
        let project = |m: &Matrix3<f64>| -> Vec<Vector3<f64>> {
            vectors.iter().map(|v| m.tr_mul(v)).collect()
        };

        #[cfg(feature = "parallel")]
        let per_orientation: Vec<Vec<Vector3<f64>>> =
            self.matrices.par_iter().map(project).collect();
        #[cfg(not(feature = "parallel"))]
        let per_orientation: Vec<Vec<Vector3<f64>>> = self.matrices.iter().map(project).collect();

        per_orientation.concat()
    }
}
