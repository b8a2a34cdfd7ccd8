//! Irrational constants underlying the solid constructions, computed once.

use std::sync::LazyLock;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
///
/// Governs vertex placement for the dodecahedron and icosahedron.
pub static PHI: LazyLock<f64> = LazyLock::new(|| (1.0 + 5.0_f64.sqrt()) / 2.0);

/// `arcsin(1/3)`, the angle between a tetrahedron's circumradius and the
/// plane of its base triangle.
pub static ASIN_ONE_THIRD: LazyLock<f64> = LazyLock::new(|| (1.0_f64 / 3.0).asin());
