use std::f64::consts::SQRT_2;

use crate::container::{FaceId, GeometryContainer};
use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Builds the cube through the container's extrusion primitive.
///
/// A cube of side `s` has circumsphere radius `s * sqrt(3) / 2`, so for a
/// radius `r` the side is `2r/sqrt(3)` and the half-diagonal of the base
/// square is `(r/sqrt(3)) * sqrt(2)`. The base n-gon at `z = -r/sqrt(3)` is
/// reversed to face outward-down, then extruded by the full side length; the
/// primitive supplies the remaining five faces with outward orientation.
///
/// # Errors
///
/// Propagates container failures.
pub fn build(radius: f64, container: &mut dyn GeometryContainer) -> Result<Vec<FaceId>> {
    let sqrt3 = 3.0_f64.sqrt();
    let base_z = -radius / sqrt3;
    let half_diagonal = radius / sqrt3 * SQRT_2;
    let side = 2.0 * radius / sqrt3;

    let base = container.add_ngon(Point3::new(0.0, 0.0, base_z), Vector3::z(), half_diagonal, 4)?;
    container.reverse_face(base)?;

    let mut ids = vec![base];
    ids.extend(container.extrude_face(base, side)?);
    Ok(ids)
}
