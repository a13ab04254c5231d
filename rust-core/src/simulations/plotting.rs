//! Drawing reflectors as Kikuchi lines or bands through a draw-primitives surface.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Vector2, Vector3};
use serde::Serialize;

use crate::config::CIRCLE_STEPS;
use crate::crystal::ReflectorSet;
use crate::Result;
use crate::interfaces::{Hemisphere, PlotMode, Projection};
use crate::projections::StereographicProjection;

/// Grey level or colour, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub fn grey(level: f64) -> Self {
        Rgb(level, level, level)
    }
}

/// Rendering surface accepting polylines in projected 2-D or unit-sphere 3-D coordinates.
pub trait DrawPrimitives {
    /// Polyline in stereographic coordinates on the given hemisphere.
    fn polyline_2d(&mut self, hemisphere: Hemisphere, points: &[Vector2<f64>], color: Rgb);
    /// Polyline on the unit sphere.
    fn polyline_3d(&mut self, points: &[Vector3<f64>], color: Rgb);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Polyline2D {
        hemisphere: Hemisphere,
        points: Vec<Vector2<f64>>,
        color: Rgb,
    },
    Polyline3D {
        points: Vec<Vector3<f64>>,
        color: Rgb,
    },
}

/// Canvas that records every primitive it is given.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingCanvas {
    pub primitives: Vec<Primitive>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl DrawPrimitives for RecordingCanvas {
    fn polyline_2d(&mut self, hemisphere: Hemisphere, points: &[Vector2<f64>], color: Rgb) {
        self.primitives.push(Primitive::Polyline2D {
            hemisphere,
            points: points.to_vec(),
            color,
        });
    }

    fn polyline_3d(&mut self, points: &[Vector3<f64>], color: Rgb) {
        self.primitives.push(Primitive::Polyline3D {
            points: points.to_vec(),
            color,
        });
    }
}

/// Points on the circle of directions at `opening_angle` from unit vector `v`.
///
/// The first and last point coincide so the polyline closes.
pub fn circle_points(v: &Vector3<f64>, opening_angle: f64, steps: usize) -> Vec<Vector3<f64>> {
    let v = v.normalize();
    // Any vector not parallel to v seeds the orthonormal frame
    let seed = if v.z.abs() < 0.9 { Vector3::z() } else { Vector3::x() };
    let u = v.cross(&seed).normalize();
    let w = v.cross(&u);
    let (sin_a, cos_a) = opening_angle.sin_cos();
    (0..steps)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / (steps.max(2) - 1) as f64;
            cos_a * v + sin_a * (t.cos() * u + t.sin() * w)
        })
        .collect()
}

/// Grey level per reflector from |F|, darker for stronger reflectors; black without structure factors.
pub fn reflector_colors(reflectors: &ReflectorSet) -> Vec<Rgb> {
    let Ok(structure_factors) = reflectors.structure_factors() else {
        return vec![Rgb::grey(0.0); reflectors.len()];
    };
    let magnitudes: Vec<f64> = structure_factors.iter().map(|f| f.norm()).collect();
    let max = magnitudes.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![Rgb::grey(0.0); reflectors.len()];
    }
    let relative: Vec<f64> = magnitudes.iter().map(|m| m / max).collect();
    let lo = relative.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = relative.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    relative.iter().map(|c| Rgb::grey((c - lo - hi).abs())).collect()
}

/// Split circle points into runs on `projection`'s hemisphere and project them.
fn stereographic_runs(points: &[Vector3<f64>], projection: &StereographicProjection) -> Vec<Vec<Vector2<f64>>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for p in points {
        if projection.contains(p) {
            current.push(projection.vector_to_xy(p));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        // A closed circle that is visible at both ends continues through its start
        if !runs.is_empty() && points.first().is_some_and(|p| projection.contains(p)) {
            let first = runs.remove(0);
            current.extend(first.into_iter().skip(1));
        }
        runs.push(current);
    }
    runs.retain(|run| run.len() > 1);
    runs
}

/// Draw every reflector as a great circle (lines) or a pair of Bragg-angle circles (bands).
///
/// Bands require Bragg angles. `hemisphere` is only used by the stereographic projection.
pub fn plot_reflectors<C: DrawPrimitives + ?Sized>(
    reflectors: &ReflectorSet,
    projection: Projection,
    mode: PlotMode,
    hemisphere: Hemisphere,
    canvas: &mut C,
) -> Result<()> {
    let opening_angles: Vec<Vec<f64>> = match mode {
        PlotMode::Lines => vec![vec![FRAC_PI_2]; reflectors.len()],
        PlotMode::Bands => reflectors
            .bragg_angles()?
            .into_iter()
            .map(|theta| vec![FRAC_PI_2 - theta, FRAC_PI_2 + theta])
            .collect(),
    };
    let colors = reflector_colors(reflectors);

    for ((reflector, angles), color) in reflectors.iter().zip(&opening_angles).zip(colors) {
        if reflector.unit_direction.norm() == 0.0 {
            continue;
        }
        for &angle in angles {
            let circle = circle_points(&reflector.unit_direction, angle, CIRCLE_STEPS);
            match projection {
                Projection::Spherical => canvas.polyline_3d(&circle, color),
                Projection::Stereographic => {
                    for &pole in hemisphere.poles() {
                        let side = if pole < 0.0 { Hemisphere::North } else { Hemisphere::South };
                        let stereographic = StereographicProjection::new(pole);
                        for run in stereographic_runs(&circle, &stereographic) {
                            canvas.polyline_2d(side, &run, color);
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
