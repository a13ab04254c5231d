use nalgebra::{Vector2, Vector3};

/// Gnomonic (central) projection onto the plane z = 1.
///
/// Returns `None` for vectors on or below the horizon, which never reach the detector.
pub fn vector_to_gnomonic(v: &Vector3<f64>) -> Option<Vector2<f64>> {
    if v.z > 0.0 {
        Some(Vector2::new(v.x / v.z, v.y / v.z))
    } else {
        None
    }
}
