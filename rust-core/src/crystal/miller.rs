//! Integer Miller index utilities.

use nalgebra::Vector3;

fn gcd(mut a: i32, mut b: i32) -> i32 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of the three components (0 for the zero vector).
pub fn index_gcd(index: &Vector3<i32>) -> i32 {
    gcd(gcd(index.x, index.y), index.z)
}

/// Reduce an index triplet to its smallest co-linear integer representative.
///
/// Components are divided by their common divisor and the sign is fixed so that
/// the first non-zero component is positive; `[0, 0, -2]` becomes `[0, 0, 1]`.
/// The zero vector is returned unchanged.
pub fn reduce_index(index: &Vector3<i32>) -> Vector3<i32> {
    let divisor = index_gcd(index);
    if divisor == 0 {
        return *index;
    }
    let reduced = index / divisor;
    let leading = reduced.iter().copied().find(|c| *c != 0).unwrap_or(0);
    if leading < 0 {
        -reduced
    } else {
        reduced
    }
}

/// Whether the triplet is already in reduced, sign-canonical form.
pub fn is_reduced(index: &Vector3<i32>) -> bool {
    reduce_index(index) == *index
}

pub fn is_zero(index: &Vector3<i32>) -> bool {
    index.iter().all(|c| *c == 0)
}
