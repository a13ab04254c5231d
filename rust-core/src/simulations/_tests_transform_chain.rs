#[cfg(test)]
mod _tests_transform_chain {
    use super::super::transform_chain::{basis_change, sample_to_detector, BatchedTransform};
    use crate::crystal::{OrientationBatch, Phase};
    use crate::detector::DetectorGeometry;
    use crate::interfaces::Space;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Rotation3, Vector3};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_sample_to_detector_standard_tilt() {
        let (s, c) = 20f64.to_radians().sin_cos();
        #[rustfmt::skip]
        let expected = Matrix3::new(
            0.0, -c, s,
            1.0, 0.0, 0.0,
            0.0, s, c,
        );
        assert_relative_eq!(sample_to_detector(70.0, 0.0), expected, epsilon = TOL);
    }

    #[test]
    fn test_sample_to_detector_is_rotation() {
        let u = sample_to_detector(68.5, 7.25);
        assert_relative_eq!(u * u.transpose(), Matrix3::identity(), epsilon = TOL);
        assert_relative_eq!(u.determinant(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_detector_tilt_offsets_sample_tilt() {
        assert_relative_eq!(
            sample_to_detector(70.0, 10.0),
            sample_to_detector(60.0, 0.0),
            epsilon = TOL
        );
    }

    #[test]
    fn test_compose_order() {
        let phase = Phase::hexagonal("ti", "6/mmm", 2.95, 4.68).unwrap();
        let detector = DetectorGeometry::new(70.0, 5.0, 1.0, (60, 60));
        let u_o = *Rotation3::from_euler_angles(0.1, -0.3, 0.7).matrix();
        let orientations = OrientationBatch::single(u_o);
        let u_s = sample_to_detector(70.0, 5.0);

        for space in [Space::Reciprocal, Space::Real] {
            let chain = BatchedTransform::compose(space, &phase, &orientations, &detector);
            let expected = basis_change(&phase, space) * u_o * u_s;
            assert_eq!(chain.space(), space);
            assert_relative_eq!(chain.matrices()[0], expected, epsilon = TOL);
        }
    }

    #[test]
    fn test_basis_change_rows() {
        let phase = Phase::cubic("fe", "m-3m", 2.0).unwrap();
        assert_relative_eq!(
            basis_change(&phase, Space::Reciprocal),
            Matrix3::from_diagonal_element(0.5),
            epsilon = TOL
        );
        assert_relative_eq!(
            basis_change(&phase, Space::Real),
            Matrix3::from_diagonal_element(2.0),
            epsilon = TOL
        );
    }

    #[test]
    fn test_to_array_keeps_navigation_shape() {
        let phase = Phase::cubic("fe", "m-3m", 2.87).unwrap();
        let detector = DetectorGeometry::default();

        let single = OrientationBatch::single(Matrix3::identity());
        let chain = BatchedTransform::compose(Space::Reciprocal, &phase, &single, &detector);
        assert_eq!(chain.to_array().shape(), &[3, 3]);

        let grid = OrientationBatch::repeat(Matrix3::identity(), &[4, 5]).unwrap();
        let chain = BatchedTransform::compose(Space::Reciprocal, &phase, &grid, &detector);
        let array = chain.to_array();
        assert_eq!(array.shape(), &[4, 5, 3, 3]);
        let m = chain.matrices()[7];
        assert_eq!(array[[1, 2, 0, 2]], m[(0, 2)]);
        assert_eq!(array[[1, 2, 2, 1]], m[(2, 1)]);
    }

    #[test]
    fn test_project_uses_row_vectors() {
        let phase = Phase::cubic("al", "m-3m", 1.0).unwrap();
        let detector = DetectorGeometry::default();
        let orientations = OrientationBatch::from_matrices(
            &[2],
            vec![
                Matrix3::identity(),
                *Rotation3::from_axis_angle(&Vector3::x_axis(), -10f64.to_radians()).matrix(),
            ],
        )
        .unwrap();
        let chain = BatchedTransform::compose(Space::Reciprocal, &phase, &orientations, &detector);
        let vectors = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 1.0)];

        let projected = chain.project(&vectors);
        let z = chain.project_z(&vectors);
        assert_eq!(projected.len(), 4);
        assert_eq!(z.len(), 4);
        for (m_index, m) in chain.matrices().iter().enumerate() {
            for (n_index, v) in vectors.iter().enumerate() {
                let expected = (v.transpose() * m).transpose();
                let k = m_index * vectors.len() + n_index;
                assert_relative_eq!(projected[k], expected, epsilon = TOL);
                assert_relative_eq!(z[k], expected.z, epsilon = TOL);
            }
        }
    }
}
