//! Projection of Kikuchi lines and zone axes onto a detector for a batch of orientations.

use log::debug;
use nalgebra::Vector3;

use crate::crystal::{OrientationBatch, ReflectorSet};
use crate::detector::DetectorGeometry;
use crate::interfaces::Space;
use crate::simulations::arrays::navigation_array;
use crate::simulations::pattern_geometry::{FeatureKind, PatternGeometry, ProjectedFeatures};
use crate::simulations::transform_chain::BatchedTransform;
use crate::simulations::visibility::{classify_flat, select_columns, visible_indices};
use crate::simulations::zone_axes::{derive_zone_axes, with_antiparallel};

/// Cull `indices` to those facing the detector in some orientation and project the survivors.
///
/// Returns the surviving positions into `indices` with the projected features.
fn cull_and_project(
    chain: &BatchedTransform,
    kind: FeatureKind,
    indices: &[Vector3<i32>],
) -> (Vec<usize>, ProjectedFeatures) {
    let n_items = indices.len();
    let vectors: Vec<Vector3<f64>> = indices.iter().map(|v| v.map(f64::from)).collect();

    // Only z is needed to decide which items survive
    let z = chain.project_z(&vectors);
    let (mask, in_any) = classify_flat(&z, n_items);
    let visible = visible_indices(&in_any);

    let visible_vectors: Vec<Vector3<f64>> = visible.iter().map(|&i| vectors[i]).collect();
    let coordinates: Vec<f64> = chain
        .project(&visible_vectors)
        .into_iter()
        .flat_map(|v| [v.x, v.y, v.z])
        .collect();
    let in_pattern = select_columns(&mask, n_items, &visible);

    let navigation = chain.navigation_shape();
    let n_visible = visible.len();
    let features = ProjectedFeatures {
        kind,
        indices: visible.iter().map(|&i| indices[i]).collect(),
        detector_coordinates: navigation_array(navigation, &[n_visible, 3], coordinates),
        in_pattern: navigation_array(navigation, &[n_visible], in_pattern),
    };
    (visible, features)
}

/// Validated, not yet evaluated projection of reflectors onto a detector.
#[derive(Debug, Clone)]
pub struct DetectorProjectionPlan<'a> {
    reflectors: &'a ReflectorSet,
    reciprocal_chain: BatchedTransform,
    direct_chain: BatchedTransform,
    max_gnomonic_radius: f64,
}

impl<'a> DetectorProjectionPlan<'a> {
    /// Compose the reciprocal and direct transform chains for every orientation.
    pub fn new(
        reflectors: &'a ReflectorSet,
        detector: &DetectorGeometry,
        orientations: &OrientationBatch,
    ) -> Self {
        let phase = reflectors.phase();
        Self {
            reflectors,
            reciprocal_chain: BatchedTransform::compose(Space::Reciprocal, phase, orientations, detector),
            direct_chain: BatchedTransform::compose(Space::Real, phase, orientations, detector),
            max_gnomonic_radius: detector.max_gnomonic_radius,
        }
    }

    pub fn navigation_shape(&self) -> &[usize] {
        self.reciprocal_chain.navigation_shape()
    }

    pub fn reciprocal_chain(&self) -> &BatchedTransform {
        &self.reciprocal_chain
    }

    pub fn direct_chain(&self) -> &BatchedTransform {
        &self.direct_chain
    }

    /// Cull and project reflectors, derive zone axes from the visible ones, and
    /// cull and project those in both signs.
    pub fn materialize(&self) -> PatternGeometry {
        let hkl = self.reflectors.hkl();
        let (visible, lines) =
            cull_and_project(&self.reciprocal_chain, FeatureKind::KikuchiLine, &hkl);
        debug!(
            "{} of {} reflectors visible in {} pattern(s)",
            visible.len(),
            hkl.len(),
            self.reciprocal_chain.len()
        );

        let uvw = with_antiparallel(&derive_zone_axes(&lines.indices));
        let (_, zone_axes) = cull_and_project(&self.direct_chain, FeatureKind::ZoneAxis, &uvw);
        debug!("{} of {} signed zone axes visible", zone_axes.len(), uvw.len());

        PatternGeometry {
            lines,
            zone_axes,
            reflectors: self.reflectors.subset(&visible),
            max_gnomonic_radius: self.max_gnomonic_radius,
            navigation_shape: self.navigation_shape().to_vec(),
        }
    }
}
