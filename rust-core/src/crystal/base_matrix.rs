use std::marker::PhantomData;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::errors::SimulationError;
use crate::Result;
use crate::interfaces::space::{Direct, Reciprocal};

/// Lattice basis with the basis vectors stored as matrix columns.
///
/// The type parameter records whether the basis spans direct or reciprocal space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BaseMatrix<S> {
    base_matrix: Matrix3<f64>,
    #[serde(skip)]
    space: PhantomData<S>,
}

impl<S> BaseMatrix<S> {
    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self> {
        // Linearly non-dependent (also catches zero vectors)
        if matrix.determinant().abs() < BASE_VECTOR_TOLERANCE {
            return Err(SimulationError::InvalidBasis(
                "Determinant too small. Vectors are either too small or linearly dependent."
                    .to_string(),
            ));
        }
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::InvalidBasis(
                "Basis contains non-finite components.".to_string(),
            ));
        }

        Ok(BaseMatrix {
            base_matrix: matrix,
            space: PhantomData,
        })
    }

    pub fn base_matrix(&self) -> &Matrix3<f64> {
        &self.base_matrix
    }

    pub fn determinant(&self) -> f64 {
        self.base_matrix.determinant()
    }

    /// Basis with vectors as rows, for transforming index row vectors: `v_cart = v · Bᵀ`.
    pub fn row_basis(&self) -> Matrix3<f64> {
        self.base_matrix.transpose()
    }

    pub fn base_vectors(&self) -> [Vector3<f64>; 3] {
        [
            self.base_matrix.column(0).into(),
            self.base_matrix.column(1).into(),
            self.base_matrix.column(2).into(),
        ]
    }

    /// Cartesian vector of the lattice vector with components `index`.
    pub fn to_cartesian(&self, index: &Vector3<f64>) -> Vector3<f64> {
        self.base_matrix * index
    }

    fn dual<T>(&self) -> BaseMatrix<T> {
        // Invertibility is guaranteed by the constructor
        let inverse = self
            .base_matrix
            .try_inverse()
            .unwrap_or_else(Matrix3::zeros);
        BaseMatrix {
            base_matrix: inverse.transpose(),
            space: PhantomData,
        }
    }
}

impl BaseMatrix<Direct> {
    /// Reciprocal basis `A⁻ᵀ` (crystallographic convention, no factor 2π).
    pub fn reciprocal(&self) -> BaseMatrix<Reciprocal> {
        self.dual()
    }
}

impl BaseMatrix<Reciprocal> {
    pub fn direct(&self) -> BaseMatrix<Direct> {
        self.dual()
    }
}
