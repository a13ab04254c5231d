use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use nalgebra::Vector3;
use kikuchi_sim::crystal::{OrientationBatch, Phase, ReflectorSet};
use kikuchi_sim::detector::DetectorGeometry;
use kikuchi_sim::simulations::{derive_zone_axes, DetectorProjectionPlan};

fn reflectors(max_index: i32) -> ReflectorSet {
    let phase = Arc::new(Phase::cubic("fe", "m-3m", 2.87).unwrap());
    let mut hkl = Vec::new();
    for h in -max_index..=max_index {
        for k in -max_index..=max_index {
            for l in -max_index..=max_index {
                if (h + k + l) % 2 == 0 && (h, k, l) != (0, 0, 0) {
                    hkl.push(Vector3::new(h, k, l));
                }
            }
        }
    }
    ReflectorSet::new(phase, &hkl)
}

/// Orientations spread over a rows x cols navigation grid
fn orientation_grid(rows: usize, cols: usize) -> OrientationBatch {
    let angles: Vec<[f64; 3]> = (0..rows * cols)
        .map(|i| {
            let t = i as f64;
            [(t * 7.3) % 360.0, (t * 3.1) % 180.0, (t * 11.7) % 360.0]
        })
        .collect();
    OrientationBatch::from_euler_bunge(&[rows, cols], &angles).unwrap()
}

fn bench_on_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("on_detector");
    group.sample_size(10);

    let reflectors = reflectors(3);
    let detector = DetectorGeometry::default();

    for side in [1, 10, 50] {
        let orientations = orientation_grid(side, side);
        group.bench_with_input(BenchmarkId::new("grid", side), &orientations, |b, orientations| {
            b.iter(|| {
                DetectorProjectionPlan::new(black_box(&reflectors), &detector, orientations).materialize()
            });
        });
    }

    group.finish();
}

fn bench_zone_axes(c: &mut Criterion) {
    let mut group = c.benchmark_group("zone_axes");
    for max_index in [2, 3, 4] {
        let hkl = reflectors(max_index).hkl();
        group.bench_with_input(BenchmarkId::new("derive", hkl.len()), &hkl, |b, hkl| {
            b.iter(|| derive_zone_axes(black_box(hkl)));
        });
    }
    group.finish();
}

criterion_group!(projection_benches, bench_on_detector, bench_zone_axes);
criterion_main!(projection_benches);
