#[cfg(test)]
mod _tests_miller {
    use super::super::miller::{index_gcd, is_reduced, is_zero, reduce_index};
    use nalgebra::Vector3;

    #[test]
    fn test_gcd() {
        assert_eq!(index_gcd(&Vector3::new(2, 4, -6)), 2);
        assert_eq!(index_gcd(&Vector3::new(0, 0, -3)), 3);
        assert_eq!(index_gcd(&Vector3::new(0, 0, 0)), 0);
        assert_eq!(index_gcd(&Vector3::new(3, 5, 7)), 1);
    }

    #[test]
    fn test_reduce_divides_common_factor() {
        assert_eq!(reduce_index(&Vector3::new(2, 2, 0)), Vector3::new(1, 1, 0));
        assert_eq!(reduce_index(&Vector3::new(0, 0, 4)), Vector3::new(0, 0, 1));
        assert_eq!(reduce_index(&Vector3::new(3, -6, 9)), Vector3::new(1, -2, 3));
    }

    #[test]
    fn test_reduce_fixes_sign() {
        assert_eq!(reduce_index(&Vector3::new(0, 0, -1)), Vector3::new(0, 0, 1));
        assert_eq!(reduce_index(&Vector3::new(-2, 4, 0)), Vector3::new(1, -2, 0));
        assert_eq!(
            reduce_index(&Vector3::new(1, -1, 1)),
            reduce_index(&Vector3::new(-1, 1, -1))
        );
    }

    #[test]
    fn test_reduce_zero_vector() {
        let zero = Vector3::new(0, 0, 0);
        assert_eq!(reduce_index(&zero), zero);
        assert!(is_zero(&zero));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let triplets = [
            Vector3::new(4, -2, 6),
            Vector3::new(-1, 0, 0),
            Vector3::new(0, -3, 3),
            Vector3::new(5, 10, -15),
            Vector3::new(1, 1, 1),
        ];
        for t in triplets.iter() {
            let once = reduce_index(t);
            assert_eq!(reduce_index(&once), once);
            assert!(is_reduced(&once));
        }
    }
}
