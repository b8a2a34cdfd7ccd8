use std::f64::consts::TAU;

use crate::container::{FaceId, GeometryContainer};
use crate::error::Result;
use crate::math::constants::ASIN_ONE_THIRD;
use crate::math::Point3;
use crate::mesh::assembler;

/// Face table over [`vertices`]: base triangle plus three sides meeting at
/// the apex.
pub const FACES: [&[usize]; 4] = [&[0, 2, 1], &[0, 1, 3], &[1, 2, 3], &[2, 0, 3]];

/// Computes the four tetrahedron vertices for a circumsphere radius.
///
/// The base triangle sits at `z = -radius/3` with ring radius
/// `radius * cos(asin(1/3))`; the apex is at `(0, 0, radius)`. The centroid
/// of the base is a third of the radius below the origin, not halfway.
#[must_use]
pub fn vertices(radius: f64) -> Vec<Point3> {
    let ring_radius = radius * ASIN_ONE_THIRD.cos();
    let base_z = -radius / 3.0;

    let mut points: Vec<Point3> = (0..3)
        .map(|i| {
            let theta = TAU * f64::from(i) / 3.0;
            Point3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), base_z)
        })
        .collect();
    points.push(Point3::new(0.0, 0.0, radius));
    points
}

/// Builds the tetrahedron face by face into the container.
///
/// # Errors
///
/// Propagates container failures.
pub fn build(radius: f64, container: &mut dyn GeometryContainer) -> Result<Vec<FaceId>> {
    assembler::add_oriented_faces(container, &vertices(radius), &FACES, &Point3::origin())
}
