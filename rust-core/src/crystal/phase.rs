use nalgebra::Matrix3;
use serde::Serialize;

use crate::crystal::base_matrix::BaseMatrix;
use crate::Result;
use crate::interfaces::space::{Direct, Reciprocal};

/// A crystal phase: name, point group and the direct/reciprocal lattice bases.
///
/// The point group is carried as an opaque label; symmetry is not evaluated here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    name: String,
    point_group: String,
    direct: BaseMatrix<Direct>,
    reciprocal: BaseMatrix<Reciprocal>,
}

impl Phase {
    /// Construct a phase from a direct basis (columns are a, b, c).
    pub fn new(
        name: impl Into<String>,
        point_group: impl Into<String>,
        direct: Matrix3<f64>,
    ) -> Result<Self> {
        let direct = BaseMatrix::<Direct>::from_matrix(direct)?;
        let reciprocal = direct.reciprocal();
        Ok(Self {
            name: name.into(),
            point_group: point_group.into(),
            direct,
            reciprocal,
        })
    }

    /// Cubic phase with lattice parameter `a`.
    pub fn cubic(name: impl Into<String>, point_group: impl Into<String>, a: f64) -> Result<Self> {
        Self::new(name, point_group, Matrix3::from_diagonal_element(a))
    }

    /// Hexagonal phase with a along x and c along z.
    pub fn hexagonal(
        name: impl Into<String>,
        point_group: impl Into<String>,
        a: f64,
        c: f64,
    ) -> Result<Self> {
        #[rustfmt::skip]
        let direct = Matrix3::new(
            a, -a / 2.0, 0.0,
            0.0, a * 3.0_f64.sqrt() / 2.0, 0.0,
            0.0, 0.0, c,
        );
        Self::new(name, point_group, direct)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point_group(&self) -> &str {
        &self.point_group
    }

    pub fn direct_basis(&self) -> &BaseMatrix<Direct> {
        &self.direct
    }

    pub fn reciprocal_basis(&self) -> &BaseMatrix<Reciprocal> {
        &self.reciprocal
    }
}
