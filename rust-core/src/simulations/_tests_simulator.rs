#[cfg(test)]
mod _tests_simulator {
    use super::super::plotting::RecordingCanvas;
    use super::super::simulator::KikuchiPatternSimulator;
    use crate::config::ExecutionConfig;
    use crate::crystal::{OrientationBatch, Phase, ReflectorSet};
    use crate::detector::DetectorGeometry;
    use crate::interfaces::{Hemisphere, PlotMode, Projection, Scaling};
    use nalgebra::Vector3;
    use num_complex::Complex64;
    use std::sync::Arc;

    fn simulator() -> KikuchiPatternSimulator {
        let phase = Arc::new(Phase::cubic("al", "m-3m", 4.05).unwrap());
        let hkl = [Vector3::new(1, 1, 1), Vector3::new(-2, 0, 0), Vector3::new(2, 2, 0)];
        let reflectors = ReflectorSet::new(phase, &hkl)
            .with_structure_factors(&[Complex64::new(8.0, 0.0); 3])
            .unwrap()
            .with_bragg_angles(&[0.0134, 0.0155, 0.0219])
            .unwrap();
        KikuchiPatternSimulator::new(reflectors)
    }

    #[test]
    fn test_display() {
        let expected = "KikuchiPatternSimulator (3,), al (m-3m)\n[  1   1   1]\n[ -2   0   0]\n[  2   2   0]";
        assert_eq!(simulator().to_string(), expected);
    }

    #[test]
    fn test_master_pattern_through_facade() {
        let simulator = simulator().with_config(ExecutionConfig::with_chunk_rows(2));
        assert_eq!(simulator.config().chunk_rows, Some(2));
        let plan = simulator.master_pattern_plan(4, Hemisphere::Both, Scaling::Linear).unwrap();
        assert_eq!(plan.output_shape(), vec![2, 9, 9]);
        let pattern = simulator.calculate_master_pattern(4, Hemisphere::Both, Scaling::Linear).unwrap();
        assert_eq!(pattern.data, plan.materialize().data);
        assert_eq!(pattern.phase.name(), "al");
    }

    #[test]
    fn test_on_detector_through_facade() {
        let simulator = simulator();
        let orientations = OrientationBatch::from_euler_bunge(&[2], &[[0.0, 0.0, 0.0], [30.0, 45.0, 60.0]]).unwrap();
        let geometry = simulator.on_detector(&DetectorGeometry::default(), &orientations);
        assert_eq!(geometry.navigation_shape, vec![2]);
        assert_eq!(geometry.reflectors.len(), geometry.lines.len());
        assert!(geometry.lines.len() <= 3);
        for (reflector, hkl) in geometry.reflectors.iter().zip(&geometry.lines.indices) {
            assert_eq!(reflector.hkl, *hkl);
        }
    }

    #[test]
    fn test_plot_through_facade() {
        let mut canvas = RecordingCanvas::new();
        simulator()
            .plot(Projection::Spherical, PlotMode::Bands, Hemisphere::North, &mut canvas)
            .unwrap();
        assert_eq!(canvas.len(), 6);
    }
}
