// Projections module: Mappings between unit directions and 2D plane coordinates
// The stereographic projection is used for master patterns, the gnomonic projection for the detector plane

// ======================== MODULE DECLARATIONS ========================
pub mod gnomonic;
pub mod stereographic;


// ======================== STEREOGRAPHIC ========================
pub use stereographic::{
    StereographicProjection, // struct - projection from a pole (-1 north, +1 south)
    linspace,                // fn(start: f64, stop: f64, num: usize) -> Vec<f64> - inclusive grid coordinates
};
// StereographicProjection impl methods:
//   new(pole: f64) -> Self                                   - pole -1 projects the upper hemisphere
//   xy_to_vector(&self, x: f64, y: f64) -> Vector3<f64>      - inverse projection to a unit vector
//   vector_to_xy(&self, v: &Vector3<f64>) -> Vector2<f64>    - forward projection
//   contains(&self, v: &Vector3<f64>) -> bool                - whether v lies on this hemisphere

// ======================== GNOMONIC ========================
pub use gnomonic::vector_to_gnomonic; // fn(v: &Vector3<f64>) -> Option<Vector2<f64>> - (x/z, y/z) for z > 0
