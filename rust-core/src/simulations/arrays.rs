use ndarray::{ArrayD, IxDyn};

/// Array of shape `(navigation..., inner...)` from row-major data.
pub(crate) fn navigation_array<T>(navigation: &[usize], inner: &[usize], data: Vec<T>) -> ArrayD<T> {
    let shape: Vec<usize> = navigation.iter().chain(inner).copied().collect();
    let len = data.len();
    ArrayD::from_shape_vec(IxDyn(&shape), data).unwrap_or_else(|_| {
        panic!(
            "{} values do not fill navigation shape {:?} with item shape {:?}",
            len, navigation, inner
        )
    })
}
