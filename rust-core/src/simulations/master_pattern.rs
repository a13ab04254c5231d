//! Kinematical master patterns in the stereographic projection.
//!
//! A pattern is built in two phases. [`MasterPatternPlan::new`] validates the options
//! and gathers one direction, intensity and band edge per reflector; nothing is
//! evaluated per pixel. [`MasterPatternPlan::materialize`] then walks the pixel grid
//! in row chunks, so only `rows × size` pixels are in flight per worker whatever the
//! grid resolution or reflector count.

use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use log::debug;
use nalgebra::Vector3;
use ndarray::{ArrayD, ArrayView2, Axis, Ix2};
use num_complex::Complex64;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{ExecutionConfig, EXACT_ZONE_TOLERANCE};
use crate::crystal::{Phase, ReflectorSet};
use crate::errors::SimulationError;
use crate::Result;
use crate::interfaces::{Hemisphere, Projection, Scaling, SimulationMode};
use crate::projections::{linspace, StereographicProjection};
use crate::simulations::arrays::navigation_array;

/// Band intensity per reflector for the requested scaling.
pub fn reflector_intensities(structure_factors: &[Complex64], scaling: Scaling) -> Vec<f64> {
    match scaling {
        Scaling::Linear => structure_factors.iter().map(|f| f.norm()).collect(),
        Scaling::Square => structure_factors.iter().map(|f| (f * f.conj()).norm()).collect(),
        Scaling::None => vec![1.0; structure_factors.len()],
    }
}

/// Summed kinematical intensity at unit direction `v`.
///
/// A pixel on the exact zone line of a reflector (`|v·r̂| ≤ 1e-7`) receives half the
/// reflector intensity; a pixel inside its band (`90° − θ ≤ ∠(v, r̂) ≤ 90°`) the full one.
pub fn pixel_intensity(
    v: &Vector3<f64>,
    directions: &[Vector3<f64>],
    intensities: &[f64],
    band_edges: &[f64],
) -> f64 {
    directions
        .iter()
        .zip(intensities)
        .zip(band_edges)
        .map(|((r, intensity), band_edge)| {
            let dot = v.dot(r);
            if dot.abs() <= EXACT_ZONE_TOLERANCE {
                return 0.5 * intensity;
            }
            let angle = dot.clamp(-1.0, 1.0).acos();
            if angle >= *band_edge && angle <= FRAC_PI_2 {
                *intensity
            } else {
                0.0
            }
        })
        .sum()
}

/// Validated, not yet evaluated master pattern computation.
#[derive(Debug, Clone)]
pub struct MasterPatternPlan {
    phase: Arc<Phase>,
    half_size: usize,
    hemisphere: Hemisphere,
    scaling: Scaling,
    directions: Vec<Vector3<f64>>,
    intensities: Vec<f64>,
    band_edges: Vec<f64>,
    rows_per_chunk: usize,
}

impl MasterPatternPlan {
    /// Validate inputs and gather per-reflector data.
    ///
    /// Fails if `half_size` is 0 or if any reflector lacks a Bragg angle or structure factor.
    pub fn new(
        reflectors: &ReflectorSet,
        half_size: usize,
        hemisphere: Hemisphere,
        scaling: Scaling,
        config: &ExecutionConfig,
    ) -> Result<Self> {
        if half_size == 0 {
            return Err(SimulationError::InvalidGridSize(half_size));
        }
        let bragg_angles = reflectors.bragg_angles()?;
        let structure_factors = reflectors.structure_factors()?;

        Ok(Self {
            phase: Arc::clone(reflectors.phase()),
            half_size,
            hemisphere,
            scaling,
            directions: reflectors.unit_directions(),
            intensities: reflector_intensities(&structure_factors, scaling),
            band_edges: bragg_angles.iter().map(|theta| FRAC_PI_2 - theta).collect(),
            rows_per_chunk: config.rows_per_chunk(half_size),
        })
    }

    /// Side length `2h + 1` of each hemisphere image.
    pub fn size(&self) -> usize {
        2 * self.half_size + 1
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn scaling(&self) -> Scaling {
        self.scaling
    }

    pub fn output_shape(&self) -> Vec<usize> {
        let size = self.size();
        match self.hemisphere {
            Hemisphere::Both => vec![2, size, size],
            Hemisphere::North | Hemisphere::South => vec![size, size],
        }
    }

    /// Evaluate every pixel and assemble the master pattern.
    pub fn materialize(&self) -> MasterPattern {
        let size = self.size();
        let poles = self.hemisphere.poles();
        debug!(
            "Materializing {} master pattern(s) of {}x{} pixels from {} reflectors in chunks of {} rows",
            poles.len(),
            size,
            size,
            self.directions.len(),
            self.rows_per_chunk
        );

        let mut data = Vec::with_capacity(poles.len() * size * size);
        for &pole in poles {
            data.extend(self.render_hemisphere(StereographicProjection::new(pole)));
        }

        let navigation: &[usize] = match self.hemisphere {
            Hemisphere::Both => &[2],
            Hemisphere::North | Hemisphere::South => &[],
        };
        MasterPattern {
            data: navigation_array(navigation, &[size, size], data),
            phase: Arc::clone(&self.phase),
            hemisphere: self.hemisphere,
            projection: Projection::Stereographic,
            mode: SimulationMode::Kinematical,
        }
    }

    fn render_hemisphere(&self, projection: StereographicProjection) -> Vec<f64> {
        let size = self.size();
        let coordinates = linspace(-1.0, 1.0, size);
        let mut pattern = vec![0.0; size * size];

        let render_chunk = |(chunk_index, chunk): (usize, &mut [f64])| {
            let first_row = chunk_index * self.rows_per_chunk;
            for (offset, value) in chunk.iter_mut().enumerate() {
                let row = first_row + offset / size;
                let column = offset % size;
                let v = projection.xy_to_vector(coordinates[column], coordinates[row]);
                *value = pixel_intensity(&v, &self.directions, &self.intensities, &self.band_edges);
            }
        };

        let chunk_len = self.rows_per_chunk * size;
        #[cfg(feature = "parallel")]
        pattern
            .par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(render_chunk);
        #[cfg(not(feature = "parallel"))]
        pattern.chunks_mut(chunk_len).enumerate().for_each(render_chunk);

        pattern
    }
}

/// Kinematical master pattern with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct MasterPattern {
    /// Intensities, `(size, size)` or `(2, size, size)` with north first.
    pub data: ArrayD<f64>,
    pub phase: Arc<Phase>,
    pub hemisphere: Hemisphere,
    pub projection: Projection,
    pub mode: SimulationMode,
}

impl MasterPattern {
    /// Side length of each hemisphere image.
    pub fn size(&self) -> usize {
        self.data.shape().last().copied().unwrap_or(0)
    }

    /// Image of one hemisphere, `None` if it was not computed.
    pub fn hemisphere_view(&self, hemisphere: Hemisphere) -> Option<ArrayView2<'_, f64>> {
        let view = match (self.hemisphere, hemisphere) {
            (Hemisphere::Both, Hemisphere::North) => self.data.index_axis(Axis(0), 0),
            (Hemisphere::Both, Hemisphere::South) => self.data.index_axis(Axis(0), 1),
            (own, requested) if own == requested && own != Hemisphere::Both => self.data.view(),
            _ => return None,
        };
        view.into_dimensionality::<Ix2>().ok()
    }

    pub fn max_intensity(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}
