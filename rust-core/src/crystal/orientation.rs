use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};

use crate::errors::SimulationError;
use crate::Result;

/// Largest supported number of navigation dimensions (e.g. a 2D scan grid).
pub const MAX_NAVIGATION_DIMENSIONS: usize = 2;

/// Crystal orientations with a navigation shape of rank 0, 1 or 2.
///
/// Matrices are stored in row-major navigation order. Each matrix is the
/// orientation as used in row-vector transforms `v_sample = v_crystal · U`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationBatch {
    shape: Vec<usize>,
    matrices: Vec<Matrix3<f64>>,
}

impl OrientationBatch {
    /// A single orientation (navigation rank 0).
    pub fn single(matrix: Matrix3<f64>) -> Self {
        Self {
            shape: Vec::new(),
            matrices: vec![matrix],
        }
    }

    pub fn from_matrices(
        shape: &[usize],
        matrices: Vec<Matrix3<f64>>,
    ) -> Result<Self> {
        let count: usize = shape.iter().product();
        if shape.len() > MAX_NAVIGATION_DIMENSIONS || count != matrices.len() {
            return Err(SimulationError::InvalidNavigationShape {
                shape: shape.to_vec(),
                count: matrices.len(),
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            matrices,
        })
    }

    pub fn from_rotations(
        shape: &[usize],
        rotations: &[Rotation3<f64>],
    ) -> Result<Self> {
        Self::from_matrices(shape, rotations.iter().map(|r| *r.matrix()).collect())
    }

    pub fn from_quaternions(
        shape: &[usize],
        quaternions: &[UnitQuaternion<f64>],
    ) -> Result<Self> {
        Self::from_matrices(
            shape,
            quaternions
                .iter()
                .map(|q| *q.to_rotation_matrix().matrix())
                .collect(),
        )
    }

    /// Orientation from Bunge Euler angles (φ1, Φ, φ2) in degrees: `Rz(φ1)·Rx(Φ)·Rz(φ2)`.
    pub fn euler_bunge_matrix(phi1: f64, big_phi: f64, phi2: f64) -> Matrix3<f64> {
        let z1 = Rotation3::from_axis_angle(&Vector3::z_axis(), phi1.to_radians());
        let x = Rotation3::from_axis_angle(&Vector3::x_axis(), big_phi.to_radians());
        let z2 = Rotation3::from_axis_angle(&Vector3::z_axis(), phi2.to_radians());
        *(z1 * x * z2).matrix()
    }

    pub fn from_euler_bunge(
        shape: &[usize],
        angles: &[[f64; 3]],
    ) -> Result<Self> {
        Self::from_matrices(
            shape,
            angles
                .iter()
                .map(|[phi1, big_phi, phi2]| Self::euler_bunge_matrix(*phi1, *big_phi, *phi2))
                .collect(),
        )
    }

    /// Tile one orientation over a navigation grid.
    pub fn repeat(matrix: Matrix3<f64>, shape: &[usize]) -> Result<Self> {
        let count = shape.iter().product();
        Self::from_matrices(shape, vec![matrix; count])
    }

    pub fn navigation_shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of orientations (product of the navigation shape).
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn matrices(&self) -> &[Matrix3<f64>] {
        &self.matrices
    }
}
