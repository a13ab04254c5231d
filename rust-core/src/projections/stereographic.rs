use nalgebra::{Vector2, Vector3};

/// Stereographic projection from the pole opposite the projected hemisphere.
///
/// `pole = -1` projects from the south pole and maps the upper (north) hemisphere
/// into the unit disc; `pole = +1` does the same for the lower hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereographicProjection {
    pole: f64,
}

impl StereographicProjection {
    pub fn new(pole: f64) -> Self {
        Self {
            pole: if pole < 0.0 { -1.0 } else { 1.0 },
        }
    }

    pub fn north() -> Self {
        Self::new(-1.0)
    }

    pub fn south() -> Self {
        Self::new(1.0)
    }

    pub fn pole(&self) -> f64 {
        self.pole
    }

    /// Inverse projection of plane coordinates to a unit vector.
    ///
    /// Points outside the unit disc map onto the opposite hemisphere.
    pub fn xy_to_vector(&self, x: f64, y: f64) -> Vector3<f64> {
        let r2 = x * x + y * y;
        let denom = 1.0 + r2;
        Vector3::new(
            2.0 * x / denom,
            2.0 * y / denom,
            -self.pole * (1.0 - r2) / denom,
        )
    }

    /// Forward projection of a unit vector to plane coordinates.
    pub fn vector_to_xy(&self, v: &Vector3<f64>) -> Vector2<f64> {
        let denom = 1.0 - self.pole * v.z;
        Vector2::new(v.x / denom, v.y / denom)
    }

    /// Whether the vector lies on the hemisphere this projection maps into the unit disc.
    pub fn contains(&self, v: &Vector3<f64>) -> bool {
        -self.pole * v.z >= 0.0
    }
}

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}
