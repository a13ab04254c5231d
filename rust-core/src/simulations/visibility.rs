//! Front/back-facing classification of projected directions.

use ndarray::ArrayD;

use crate::simulations::arrays::navigation_array;

/// Whether a detector-frame z coordinate faces the detector.
///
/// The horizon, `z == 0`, is not visible.
#[inline]
pub fn is_upper_hemisphere(z: f64) -> bool {
    z > 0.0
}

/// Per-orientation and any-orientation visibility of N items.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereVisibility {
    /// `z > 0` per orientation and item, shape `(navigation..., N)`.
    pub per_orientation: ArrayD<bool>,
    /// `true` where at least one orientation sees the item, length N.
    pub in_any: Vec<bool>,
}

impl HemisphereVisibility {
    /// Indices of items visible in at least one orientation, in input order.
    pub fn visible_indices(&self) -> Vec<usize> {
        visible_indices(&self.in_any)
    }

    pub fn n_visible(&self) -> usize {
        self.in_any.iter().filter(|v| **v).count()
    }
}

/// Classify z coordinates shaped `(navigation..., N)`.
pub fn classify(z: &ArrayD<f64>) -> HemisphereVisibility {
    let shape = z.shape();
    let (navigation, n_items) = match shape.split_last() {
        Some((n, navigation)) => (navigation.to_vec(), *n),
        None => (Vec::new(), 1),
    };
    let values: Vec<f64> = z.iter().copied().collect();
    let (mask, in_any) = classify_flat(&values, n_items);
    HemisphereVisibility {
        per_orientation: navigation_array(&navigation, &[n_items], mask),
        in_any,
    }
}

/// Classify row-major `(M, N)` z coordinates; returns the flat mask and the OR over M.
pub fn classify_flat(z: &[f64], n_items: usize) -> (Vec<bool>, Vec<bool>) {
    let mask: Vec<bool> = z.iter().map(|v| is_upper_hemisphere(*v)).collect();
    let mut in_any = vec![false; n_items];
    if n_items > 0 {
        for row in mask.chunks(n_items) {
            for (any, visible) in in_any.iter_mut().zip(row) {
                *any |= *visible;
            }
        }
    }
    (mask, in_any)
}

pub fn visible_indices(in_any: &[bool]) -> Vec<usize> {
    in_any
        .iter()
        .enumerate()
        .filter_map(|(i, visible)| visible.then_some(i))
        .collect()
}

/// Keep only the columns `indices` of a row-major `(M, N)` array.
pub(crate) fn select_columns<T: Copy>(values: &[T], n_items: usize, indices: &[usize]) -> Vec<T> {
    if n_items == 0 {
        return Vec::new();
    }
    values
        .chunks(n_items)
        .flat_map(|row| indices.iter().map(move |&i| row[i]))
        .collect()
}
