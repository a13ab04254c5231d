// Crystal module: Phases, lattice bases, reflectors and orientations
// These are the crystallographic inputs consumed by the simulations; nothing here is recomputed per pattern

// ======================== MODULE DECLARATIONS ========================
pub mod base_matrix;
pub mod miller;
pub mod orientation;
pub mod phase;
pub mod reflectors;

mod _tests_miller;

// ======================== LATTICE BASES & PHASES ========================
pub use base_matrix::BaseMatrix; // struct - basis vectors as columns, typed by Direct/Reciprocal space
// BaseMatrix impl methods:
//   from_matrix(matrix: Matrix3<f64>) -> Result<Self>         - validates invertibility
//   row_basis(&self) -> Matrix3<f64>                          - basis vectors as rows (row-vector transforms)
//   to_cartesian(&self, index: &Vector3<f64>) -> Vector3<f64> - lattice vector in cartesian coordinates
//   reciprocal()/direct()                                     - dual basis A⁻ᵀ

pub use phase::Phase; // struct - name, point group label, direct + reciprocal bases
// Phase impl methods:
//   new(name, point_group, direct: Matrix3<f64>) -> Result<Self> - direct basis as columns
//   cubic(name, point_group, a) / hexagonal(name, point_group, a, c)
//   direct_basis(&self) / reciprocal_basis(&self)

// ======================== REFLECTORS ========================
pub use reflectors::{
    Reflector,    // struct - hkl, unit direction, optional structure factor and Bragg angle
    ReflectorSet, // struct - flat reflector list sharing one Arc<Phase>
};
// ReflectorSet impl methods:
//   new(phase, hkl) -> Self                                   - unit directions from the reciprocal basis
//   with_structure_factors(self, &[Complex64]) -> Result<Self>
//   with_bragg_angles(self, &[f64]) -> Result<Self>
//   structure_factors()/bragg_angles() -> Result<Vec<_>>      - fail with MissingAttribute
//   subset(&self, indices: &[usize]) -> Self

// ======================== MILLER INDICES ========================
pub use miller::{
    index_gcd,    // fn(&Vector3<i32>) -> i32
    is_reduced,   // fn(&Vector3<i32>) -> bool
    reduce_index, // fn(&Vector3<i32>) -> Vector3<i32> - smallest integer triplet, first non-zero component positive
};

// ======================== ORIENTATIONS ========================
pub use orientation::OrientationBatch; // struct - rotation matrices with a navigation shape of rank ≤ 2
