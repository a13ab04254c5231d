/// Example simulating the Kikuchi pattern geometry of a face-centred cubic phase
///
/// This example builds a small reflector set, computes a coarse master pattern and
/// projects Kikuchi lines and zone axes onto a detector for a 2 x 2 orientation grid.
use std::sync::Arc;

use kikuchi_sim::crystal::{OrientationBatch, Phase, ReflectorSet};
use kikuchi_sim::detector::DetectorGeometry;
use kikuchi_sim::interfaces::{Hemisphere, PlotMode, Projection, Scaling};
use kikuchi_sim::simulations::RecordingCanvas;
use kikuchi_sim::KikuchiPatternSimulator;
use nalgebra::Vector3;
use num_complex::Complex64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Kinematical Kikuchi pattern geometry of aluminium ===\n");

    // Example 1: Reflectors with structure factors and Bragg angles for 20 kV electrons
    let a = 4.05;
    let wavelength = 0.0859;
    let phase = Arc::new(Phase::cubic("al", "m-3m", a)?);
    let hkl = [
        Vector3::new(1, 1, 1),
        Vector3::new(-1, 1, 1),
        Vector3::new(1, -1, 1),
        Vector3::new(1, 1, -1),
        Vector3::new(2, 0, 0),
        Vector3::new(0, 2, 0),
        Vector3::new(0, 0, 2),
        Vector3::new(2, 2, 0),
        Vector3::new(2, 0, 2),
        Vector3::new(0, 2, 2),
    ];
    let bragg_angles: Vec<f64> = hkl
        .iter()
        .map(|v| {
            let d = a / f64::from(v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
            (wavelength / (2.0 * d)).asin()
        })
        .collect();
    let structure_factors: Vec<Complex64> = hkl
        .iter()
        .map(|v| Complex64::new(if v.iter().any(|i: &i32| i.abs() == 1) { 8.0 } else { 6.5 }, 0.0))
        .collect();
    let reflectors = ReflectorSet::new(phase, &hkl)
        .with_structure_factors(&structure_factors)?
        .with_bragg_angles(&bragg_angles)?;
    let simulator = KikuchiPatternSimulator::new(reflectors);
    println!("1. {}\n", simulator);

    // Example 2: Master pattern of both hemispheres
    println!("2. Master pattern:");
    let pattern = simulator.calculate_master_pattern(50, Hemisphere::Both, Scaling::Linear)?;
    println!("   Shape: {:?}", pattern.data.shape());
    println!("   Maximum intensity: {:.3}\n", pattern.max_intensity());

    // Example 3: Lines and zone axes on the detector
    println!("3. Detector projection:");
    let detector = DetectorGeometry::new(70.0, 0.0, 1.2, (60, 60));
    let orientations = OrientationBatch::from_euler_bunge(
        &[2, 2],
        &[[0.0, 10.0, 0.0], [15.0, 10.0, 0.0], [0.0, 25.0, 30.0], [45.0, 35.0, 10.0]],
    )?;
    let geometry = simulator.on_detector(&detector, &orientations);
    println!("   Patterns: {}", geometry.n_patterns());
    println!("   Lines visible in some pattern: {}", geometry.lines.len());
    println!("   Zone axes visible in some pattern: {}", geometry.zone_axes.len());
    for i in 0..2 {
        for j in 0..2 {
            println!(
                "   Pattern ({}, {}): {} lines, {} zone axes",
                i,
                j,
                geometry.lines.count_in_pattern_at(&[i, j]),
                geometry.zone_axes.count_in_pattern_at(&[i, j])
            );
        }
    }

    // Example 4: Bands drawn in the stereographic projection
    println!("\n4. Plotting:");
    let mut canvas = RecordingCanvas::new();
    simulator.plot(Projection::Stereographic, PlotMode::Bands, Hemisphere::Both, &mut canvas)?;
    println!("   Polylines: {}", canvas.len());

    Ok(())
}
