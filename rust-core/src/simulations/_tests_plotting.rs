#[cfg(test)]
mod _tests_plotting {
    use super::super::plotting::{circle_points, plot_reflectors, reflector_colors, Primitive, RecordingCanvas, Rgb};
    use crate::crystal::{Phase, ReflectorSet};
    use crate::errors::{ReflectorAttribute, SimulationError};
    use crate::interfaces::{Hemisphere, PlotMode, Projection};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use num_complex::Complex64;
    use std::f64::consts::FRAC_PI_2;
    use std::sync::Arc;

    fn reflectors(hkl: &[Vector3<i32>]) -> ReflectorSet {
        let phase = Arc::new(Phase::cubic("ni", "m-3m", 3.52).unwrap());
        ReflectorSet::new(phase, hkl)
    }

    #[test]
    fn test_circle_points_are_closed_and_at_opening_angle() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        let points = circle_points(&v, 0.3, 101);
        assert_eq!(points.len(), 101);
        assert_relative_eq!(points[0], points[100], epsilon = 1e-12);
        let unit = v.normalize();
        for p in &points {
            assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(p.dot(&unit), 0.3f64.cos(), epsilon = 1e-12);
        }

        // Great circle about the z axis
        for p in circle_points(&Vector3::z(), FRAC_PI_2, 11) {
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_colors_scale_with_structure_factor() {
        let set = reflectors(&[Vector3::new(1, 1, 1), Vector3::new(2, 0, 0), Vector3::new(2, 2, 0)])
            .with_structure_factors(&[
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 2.0),
                Complex64::new(4.0, 0.0),
            ])
            .unwrap();
        let colors = reflector_colors(&set);
        assert_relative_eq!(colors[0].0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(colors[1].0, 0.75, epsilon = 1e-12);
        assert_relative_eq!(colors[2].0, 0.25, epsilon = 1e-12);

        let bare = reflectors(&[Vector3::new(1, 1, 1)]);
        assert_eq!(reflector_colors(&bare), vec![Rgb::grey(0.0)]);
    }

    #[test]
    fn test_spherical_lines_and_bands() {
        let set = reflectors(&[Vector3::new(1, 1, 1), Vector3::new(2, 0, 0)])
            .with_bragg_angles(&[0.02, 0.03])
            .unwrap();

        let mut canvas = RecordingCanvas::new();
        plot_reflectors(&set, Projection::Spherical, PlotMode::Lines, Hemisphere::North, &mut canvas).unwrap();
        assert_eq!(canvas.len(), 2);

        let mut canvas = RecordingCanvas::new();
        plot_reflectors(&set, Projection::Spherical, PlotMode::Bands, Hemisphere::North, &mut canvas).unwrap();
        assert_eq!(canvas.len(), 4);
        let Primitive::Polyline3D { points, .. } = &canvas.primitives[0] else {
            panic!("expected a 3-D polyline");
        };
        let unit = Vector3::new(1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(points[0].dot(&unit), (FRAC_PI_2 - 0.02).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_bands_need_bragg_angles() {
        let set = reflectors(&[Vector3::new(1, 1, 1)]);
        let mut canvas = RecordingCanvas::new();
        let err = plot_reflectors(&set, Projection::Spherical, PlotMode::Bands, Hemisphere::North, &mut canvas)
            .unwrap_err();
        assert_eq!(err, SimulationError::MissingAttribute { attribute: ReflectorAttribute::BraggAngle });
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_stereographic_lines_per_hemisphere() {
        let set = reflectors(&[Vector3::new(1, 0, 0)]);

        let mut canvas = RecordingCanvas::new();
        plot_reflectors(&set, Projection::Stereographic, PlotMode::Lines, Hemisphere::Both, &mut canvas).unwrap();
        let mut north = 0;
        let mut south = 0;
        for primitive in &canvas.primitives {
            let Primitive::Polyline2D { hemisphere, points, .. } = primitive else {
                panic!("expected a 2-D polyline");
            };
            assert!(points.len() > 1);
            assert!(points.iter().all(|p| p.norm() <= 1.0 + 1e-9));
            match hemisphere {
                Hemisphere::North => north += 1,
                Hemisphere::South => south += 1,
                Hemisphere::Both => panic!("polylines belong to one hemisphere"),
            }
        }
        assert!(north >= 1);
        assert!(south >= 1);

        let mut canvas = RecordingCanvas::new();
        plot_reflectors(&set, Projection::Stereographic, PlotMode::Lines, Hemisphere::North, &mut canvas).unwrap();
        assert_eq!(canvas.len(), north);
    }

    #[test]
    fn test_zero_direction_is_skipped() {
        let set = reflectors(&[Vector3::new(0, 0, 0), Vector3::new(1, 1, 1)]);
        let mut canvas = RecordingCanvas::new();
        plot_reflectors(&set, Projection::Spherical, PlotMode::Lines, Hemisphere::North, &mut canvas).unwrap();
        assert_eq!(canvas.len(), 1);
    }
}
