use nalgebra::Vector3;
use ndarray::{ArrayD, ArrayViewD, Axis};
use serde::Serialize;

use crate::crystal::ReflectorSet;
use crate::projections::vector_to_gnomonic;
use crate::simulations::arrays::navigation_array;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureKind {
    /// Kikuchi line from a reflector {hkl}
    KikuchiLine,
    /// Zone axis ⟨uvw⟩
    ZoneAxis,
}

/// Features (lines or zone axes) visible in at least one pattern, with their
/// detector-frame coordinates for every orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedFeatures {
    pub kind: FeatureKind,
    /// Miller indices, {hkl} for lines and ⟨uvw⟩ for zone axes.
    pub indices: Vec<Vector3<i32>>,
    /// Detector-frame vectors, shape `(navigation..., N, 3)`.
    pub detector_coordinates: ArrayD<f64>,
    /// Whether each feature is on the detector-facing hemisphere, shape `(navigation..., N)`.
    pub in_pattern: ArrayD<bool>,
}

fn at<'a, T>(array: &'a ArrayD<T>, navigation_index: &[usize]) -> ArrayViewD<'a, T> {
    navigation_index
        .iter()
        .fold(array.view(), |view, &i| view.index_axis_move(Axis(0), i))
}

impl ProjectedFeatures {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn navigation_shape(&self) -> &[usize] {
        let shape = self.in_pattern.shape();
        &shape[..shape.len().saturating_sub(1)]
    }

    /// Detector-frame vectors of one pattern.
    ///
    /// # Panics
    /// If `navigation_index` is out of bounds for the navigation shape.
    pub fn detector_vectors_at(&self, navigation_index: &[usize]) -> Vec<Vector3<f64>> {
        let values: Vec<f64> = at(&self.detector_coordinates, navigation_index)
            .iter()
            .copied()
            .collect();
        values
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect()
    }

    /// Visibility mask of one pattern.
    ///
    /// # Panics
    /// If `navigation_index` is out of bounds for the navigation shape.
    pub fn in_pattern_at(&self, navigation_index: &[usize]) -> Vec<bool> {
        at(&self.in_pattern, navigation_index).iter().copied().collect()
    }

    pub fn count_in_pattern_at(&self, navigation_index: &[usize]) -> usize {
        self.in_pattern_at(navigation_index).into_iter().filter(|v| *v).count()
    }

    /// Gnomonic coordinates `(x/z, y/z)`, shape `(navigation..., N, 2)`.
    ///
    /// Features on or below the horizon get NaN. No cropping to the detector is done.
    pub fn gnomonic_coordinates(&self) -> ArrayD<f64> {
        let values: Vec<f64> = self.detector_coordinates.iter().copied().collect();
        let data = values
            .chunks_exact(3)
            .flat_map(|c| match vector_to_gnomonic(&Vector3::new(c[0], c[1], c[2])) {
                Some(p) => [p.x, p.y],
                None => [f64::NAN, f64::NAN],
            })
            .collect();
        navigation_array(self.navigation_shape(), &[self.len(), 2], data)
    }
}

/// Geometry of Kikuchi lines and zone axes on the detector for a batch of orientations.
#[derive(Debug, Clone, Serialize)]
pub struct PatternGeometry {
    pub lines: ProjectedFeatures,
    pub zone_axes: ProjectedFeatures,
    /// Reflectors visible in at least one pattern, in the order of `lines.indices`.
    pub reflectors: ReflectorSet,
    /// Gnomonic radius to crop to when drawing; carried through, not applied.
    pub max_gnomonic_radius: f64,
    pub navigation_shape: Vec<usize>,
}

impl PatternGeometry {
    /// Number of orientations in the batch.
    pub fn n_patterns(&self) -> usize {
        self.navigation_shape.iter().product()
    }
}
