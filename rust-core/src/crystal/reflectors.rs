use std::sync::Arc;

use nalgebra::Vector3;
use num_complex::Complex64;
use serde::Serialize;

use crate::crystal::phase::Phase;
use crate::errors::{ReflectorAttribute, SimulationError};
use crate::Result;

/// A reciprocal lattice vector able to diffract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reflector {
    /// Miller indices {hkl}.
    pub hkl: Vector3<i32>,
    /// Cartesian unit vector along the reciprocal lattice vector.
    pub unit_direction: Vector3<f64>,
    /// Kinematical structure factor F_hkl, if calculated upstream.
    pub structure_factor: Option<Complex64>,
    /// Bragg angle θ in radians, if calculated upstream.
    pub bragg_angle: Option<f64>,
}

impl Reflector {
    pub fn new(hkl: Vector3<i32>, unit_direction: Vector3<f64>) -> Self {
        Self {
            hkl,
            unit_direction,
            structure_factor: None,
            bragg_angle: None,
        }
    }

    pub fn with_structure_factor(mut self, structure_factor: Complex64) -> Self {
        self.structure_factor = Some(structure_factor);
        self
    }

    pub fn with_bragg_angle(mut self, bragg_angle: f64) -> Self {
        self.bragg_angle = Some(bragg_angle);
        self
    }

    /// Indices as floating point, for frame transformations.
    pub fn hkl_f64(&self) -> Vector3<f64> {
        self.hkl.map(f64::from)
    }
}

/// Immutable, flat collection of reflectors belonging to one phase.
#[derive(Debug, Clone, Serialize)]
pub struct ReflectorSet {
    phase: Arc<Phase>,
    reflectors: Vec<Reflector>,
}

impl ReflectorSet {
    /// Build reflectors from Miller indices, deriving unit directions from the
    /// phase's reciprocal basis. Zero indices get a zero direction.
    pub fn new(phase: Arc<Phase>, hkl: &[Vector3<i32>]) -> Self {
        let reciprocal = phase.reciprocal_basis();
        let reflectors = hkl
            .iter()
            .map(|index| {
                let g = reciprocal.to_cartesian(&index.map(f64::from));
                let unit = g.try_normalize(0.0).unwrap_or_else(Vector3::zeros);
                Reflector::new(*index, unit)
            })
            .collect();
        Self { phase, reflectors }
    }

    /// Wrap reflectors whose unit directions are already known.
    pub fn from_reflectors(phase: Arc<Phase>, reflectors: Vec<Reflector>) -> Self {
        Self { phase, reflectors }
    }

    /// Attach one structure factor per reflector.
    pub fn with_structure_factors(
        mut self,
        structure_factors: &[Complex64],
    ) -> Result<Self> {
        self.check_len("structure factors", structure_factors.len())?;
        for (reflector, f) in self.reflectors.iter_mut().zip(structure_factors) {
            reflector.structure_factor = Some(*f);
        }
        Ok(self)
    }

    /// Attach one Bragg angle (radians) per reflector.
    pub fn with_bragg_angles(mut self, bragg_angles: &[f64]) -> Result<Self> {
        self.check_len("Bragg angles", bragg_angles.len())?;
        for (reflector, theta) in self.reflectors.iter_mut().zip(bragg_angles) {
            reflector.bragg_angle = Some(*theta);
        }
        Ok(self)
    }

    fn check_len(&self, what: &'static str, actual: usize) -> Result<()> {
        if actual != self.len() {
            return Err(SimulationError::LengthMismatch {
                what,
                expected: self.len(),
                actual,
            });
        }
        Ok(())
    }

    pub fn phase(&self) -> &Arc<Phase> {
        &self.phase
    }

    pub fn len(&self) -> usize {
        self.reflectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reflectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reflector> {
        self.reflectors.iter()
    }

    pub fn reflectors(&self) -> &[Reflector] {
        &self.reflectors
    }

    pub fn hkl(&self) -> Vec<Vector3<i32>> {
        self.reflectors.iter().map(|r| r.hkl).collect()
    }

    pub fn unit_directions(&self) -> Vec<Vector3<f64>> {
        self.reflectors.iter().map(|r| r.unit_direction).collect()
    }

    /// Structure factors of every reflector, failing if any is missing.
    pub fn structure_factors(&self) -> Result<Vec<Complex64>> {
        self.reflectors
            .iter()
            .map(|r| {
                r.structure_factor.ok_or(SimulationError::MissingAttribute {
                    attribute: ReflectorAttribute::StructureFactor,
                })
            })
            .collect()
    }

    /// Bragg angles of every reflector, failing if any is missing.
    pub fn bragg_angles(&self) -> Result<Vec<f64>> {
        self.reflectors
            .iter()
            .map(|r| {
                r.bragg_angle.ok_or(SimulationError::MissingAttribute {
                    attribute: ReflectorAttribute::BraggAngle,
                })
            })
            .collect()
    }

    pub fn has_structure_factors(&self) -> bool {
        self.reflectors.iter().all(|r| r.structure_factor.is_some())
    }

    pub fn has_bragg_angles(&self) -> bool {
        self.reflectors.iter().all(|r| r.bragg_angle.is_some())
    }

    /// New set with the reflectors at `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self {
            phase: Arc::clone(&self.phase),
            reflectors: indices.iter().map(|&i| self.reflectors[i].clone()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ReflectorSet {
    type Item = &'a Reflector;
    type IntoIter = std::slice::Iter<'a, Reflector>;

    fn into_iter(self) -> Self::IntoIter {
        self.reflectors.iter()
    }
}
