//! Flat reflector tables for exchanging reflector sets as JSON.
//!
//! Writing a table skips reflectors whose attributes cannot be represented as finite
//! numbers; each skip is logged as a warning and is not an error.

use std::sync::Arc;

use log::warn;
use nalgebra::{Matrix3, Vector3};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::crystal::{Phase, Reflector, ReflectorSet};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub name: String,
    pub point_group: String,
    /// Direct lattice vectors a, b, c as rows.
    pub direct_basis: [[f64; 3]; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectorRecord {
    pub hkl: [i32; 3],
    /// Structure factor as `[re, im]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_factor: Option<[f64; 2]>,
    /// Bragg angle in radians.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bragg_angle: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectorTable {
    pub phase: PhaseRecord,
    pub reflectors: Vec<ReflectorRecord>,
}

fn record_of(reflector: &Reflector) -> Option<ReflectorRecord> {
    let structure_factor = reflector.structure_factor.map(|f| [f.re, f.im]);
    let finite = reflector.unit_direction.iter().all(|c| c.is_finite())
        && structure_factor.map_or(true, |f| f.iter().all(|c| c.is_finite()))
        && reflector.bragg_angle.map_or(true, f64::is_finite);
    finite.then(|| ReflectorRecord {
        hkl: [reflector.hkl.x, reflector.hkl.y, reflector.hkl.z],
        structure_factor,
        bragg_angle: reflector.bragg_angle,
    })
}

/// Records for every reflector that can be written, skipping the others with a warning.
pub fn reflector_records(reflectors: &ReflectorSet) -> Vec<ReflectorRecord> {
    reflectors
        .iter()
        .filter_map(|reflector| {
            let record = record_of(reflector);
            if record.is_none() {
                warn!(
                    "Could not write reflector ({} {} {}): non-finite attributes {:?}",
                    reflector.hkl.x, reflector.hkl.y, reflector.hkl.z, reflector
                );
            }
            record
        })
        .collect()
}

impl ReflectorTable {
    pub fn from_set(reflectors: &ReflectorSet) -> Self {
        let phase = reflectors.phase();
        let rows = phase.direct_basis().row_basis();
        let mut direct_basis = [[0.0; 3]; 3];
        for (i, row) in direct_basis.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = rows[(i, j)];
            }
        }
        Self {
            phase: PhaseRecord {
                name: phase.name().to_string(),
                point_group: phase.point_group().to_string(),
                direct_basis,
            },
            reflectors: reflector_records(reflectors),
        }
    }

    /// Build the phase and reflector set; unit directions come from the reciprocal basis.
    pub fn into_set(self) -> Result<ReflectorSet> {
        let rows = self.phase.direct_basis;
        let direct = Matrix3::from_row_slice(&rows.concat()).transpose();
        let phase = Arc::new(Phase::new(self.phase.name, self.phase.point_group, direct)?);

        let hkl: Vec<Vector3<i32>> = self.reflectors.iter().map(|r| Vector3::from(r.hkl)).collect();
        let derived = ReflectorSet::new(Arc::clone(&phase), &hkl);
        let reflectors = derived
            .iter()
            .zip(&self.reflectors)
            .map(|(reflector, record)| Reflector {
                structure_factor: record.structure_factor.map(|[re, im]| Complex64::new(re, im)),
                bragg_angle: record.bragg_angle,
                ..reflector.clone()
            })
            .collect();
        Ok(ReflectorSet::from_reflectors(phase, reflectors))
    }
}
