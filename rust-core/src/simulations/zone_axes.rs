//! Zone axes shared by pairs of visible reflectors.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::crystal::miller::{is_zero, reduce_index};

/// Derive unique zone axes ⟨uvw⟩ from reflector indices {hkl}.
///
/// Every ordered pair contributes `hkl_i × hkl_j`; parallel pairs (zero cross product)
/// are dropped, the rest reduced to the smallest integer triplet with the first
/// non-zero component positive, and duplicates removed keeping the first occurrence.
pub fn derive_zone_axes(hkl: &[Vector3<i32>]) -> Vec<Vector3<i32>> {
    let mut seen = HashSet::new();
    let mut zone_axes = Vec::new();
    for a in hkl {
        for b in hkl {
            let uvw = a.cross(b);
            if is_zero(&uvw) {
                continue;
            }
            let uvw = reduce_index(&uvw);
            if seen.insert((uvw.x, uvw.y, uvw.z)) {
                zone_axes.push(uvw);
            }
        }
    }
    zone_axes
}

/// Both orientations `[uvw, −uvw]` of every zone axis, canonical sign first.
///
/// Only one of an antiparallel pair can face the detector in a given pattern, and
/// which one depends on the orientation, so both are offered to the visibility cull.
pub fn with_antiparallel(uvw: &[Vector3<i32>]) -> Vec<Vector3<i32>> {
    uvw.iter().flat_map(|axis| [*axis, -*axis]).collect()
}
