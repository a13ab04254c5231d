#[cfg(test)]
mod _tests_visibility {
    use super::super::visibility::{classify, classify_flat, is_upper_hemisphere, select_columns};
    use ndarray::{arr1, arr2, ArrayD, IxDyn};

    #[test]
    fn test_horizon_is_not_visible() {
        assert!(!is_upper_hemisphere(0.0));
        assert!(!is_upper_hemisphere(-0.0));
        assert!(is_upper_hemisphere(f64::MIN_POSITIVE));
        let visibility = classify(&arr1(&[0.0, 1e-300, -1e-300]).into_dyn());
        assert_eq!(visibility.per_orientation.iter().copied().collect::<Vec<_>>(), vec![false, true, false]);
        assert_eq!(visibility.in_any, vec![false, true, false]);
    }

    #[test]
    fn test_single_orientation_shape() {
        let visibility = classify(&arr1(&[0.5, -0.5, 0.0]).into_dyn());
        assert_eq!(visibility.per_orientation.shape(), &[3]);
        assert_eq!(visibility.visible_indices(), vec![0]);
        assert_eq!(visibility.n_visible(), 1);
    }

    #[test]
    fn test_or_over_one_navigation_axis() {
        let z = arr2(&[[0.1, -0.2, 0.0], [-0.1, 0.3, 0.0]]).into_dyn();
        let visibility = classify(&z);
        assert_eq!(visibility.per_orientation.shape(), &[2, 3]);
        assert_eq!(visibility.in_any, vec![true, true, false]);
        assert_eq!(visibility.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn test_or_over_two_navigation_axes() {
        let mut z = ArrayD::from_elem(IxDyn(&[3, 4, 2]), -1.0);
        z[[2, 3, 1]] = 0.25;
        let visibility = classify(&z);
        assert_eq!(visibility.per_orientation.shape(), &[3, 4, 2]);
        assert!(visibility.per_orientation[[2, 3, 1]]);
        assert!(!visibility.per_orientation[[2, 2, 1]]);
        assert_eq!(visibility.in_any, vec![false, true]);
    }

    #[test]
    fn test_flat_and_select_columns() {
        let (mask, in_any) = classify_flat(&[1.0, -1.0, 0.0, -1.0, -1.0, 2.0], 3);
        assert_eq!(mask, vec![true, false, false, false, false, true]);
        assert_eq!(in_any, vec![true, false, true]);
        assert_eq!(select_columns(&mask, 3, &[0, 2]), vec![true, false, false, true]);
    }

    #[test]
    fn test_empty_items() {
        let (mask, in_any) = classify_flat(&[], 0);
        assert!(mask.is_empty());
        assert!(in_any.is_empty());
        assert!(select_columns::<bool>(&[], 0, &[]).is_empty());
    }
}
