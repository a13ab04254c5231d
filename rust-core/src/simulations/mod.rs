// Simulations module: Master patterns and detector projections of Kikuchi lines and zone axes
// Each entry point builds a validated plan first and evaluates it in `materialize()`

// ======================== MODULE DECLARATIONS ========================
mod arrays;
pub mod master_pattern;
pub mod pattern_geometry;
pub mod plotting;
pub mod projector;
pub mod records;
pub mod simulator;
pub mod transform_chain;
pub mod visibility;
pub mod zone_axes;

mod _tests_plotting;
mod _tests_simulator;
mod _tests_transform_chain;
mod _tests_visibility;

// ======================== SIMULATOR FACADE ========================
pub use simulator::KikuchiPatternSimulator; // struct - reflectors + execution config
// KikuchiPatternSimulator impl methods:
//   new(reflectors: ReflectorSet) -> Self
//   with_config(self, config: ExecutionConfig) -> Self
//   master_pattern_plan(&self, half_size, hemisphere, scaling) -> Result<MasterPatternPlan>
//   calculate_master_pattern(&self, half_size, hemisphere, scaling) -> Result<MasterPattern>
//   on_detector_plan(&self, detector, orientations) -> DetectorProjectionPlan
//   on_detector(&self, detector, orientations) -> PatternGeometry
//   plot(&self, projection, mode, hemisphere, canvas: &mut impl DrawPrimitives) -> Result<()>

// ======================== MASTER PATTERN ========================
pub use master_pattern::{
    MasterPattern,         // struct - (size, size) or (2, size, size) intensities + metadata
    MasterPatternPlan,     // struct - validated computation, evaluated by materialize()
    pixel_intensity,       // fn(v, directions, intensities, band_edges) -> f64
    reflector_intensities, // fn(&[Complex64], Scaling) -> Vec<f64>
};

// ======================== DETECTOR PROJECTION ========================
pub use pattern_geometry::{
    FeatureKind,       // enum - KikuchiLine or ZoneAxis
    PatternGeometry,   // struct - lines + zone axes + visible reflectors + max gnomonic radius
    ProjectedFeatures, // struct - indices, (nav..., N, 3) detector coordinates, (nav..., N) mask
};
pub use projector::DetectorProjectionPlan; // struct - transform chains, evaluated by materialize()

// ======================== GEOMETRY BUILDING BLOCKS ========================
pub use transform_chain::{
    BatchedTransform,   // struct - one B · U_o · U_s per orientation
    basis_change,       // fn(&Phase, Space) -> Matrix3<f64>
    sample_to_detector, // fn(sample_tilt, detector_tilt) -> Matrix3<f64>
};
pub use visibility::{
    HemisphereVisibility, // struct - per-orientation mask + any-orientation mask
    classify,             // fn(&ArrayD<f64>) -> HemisphereVisibility
    is_upper_hemisphere,  // fn(z: f64) -> bool - strictly z > 0
};
pub use zone_axes::{
    derive_zone_axes,  // fn(&[Vector3<i32>]) -> Vec<Vector3<i32>> - canonical sign, first occurrence order
    with_antiparallel, // fn(&[Vector3<i32>]) -> Vec<Vector3<i32>> - [uvw, -uvw] per axis
};

// ======================== PLOTTING & RECORDS ========================
pub use plotting::{DrawPrimitives, Primitive, RecordingCanvas, Rgb, plot_reflectors};
pub use records::{PhaseRecord, ReflectorRecord, ReflectorTable, reflector_records};
