use std::f64::consts::TAU;

use crate::container::{FaceId, GeometryContainer};
use crate::error::Result;
use crate::math::Point3;
use crate::mesh::assembler;

/// Face table over [`vertices`]: each edge of the equatorial square forms
/// one face with the top apex and one with the bottom apex.
pub const FACES: [&[usize]; 8] = [
    &[0, 1, 4],
    &[1, 2, 4],
    &[2, 3, 4],
    &[3, 0, 4],
    &[1, 0, 5],
    &[2, 1, 5],
    &[3, 2, 5],
    &[0, 3, 5],
];

/// Computes the six octahedron vertices for a circumsphere radius.
///
/// The equatorial square has the same half-diagonal as the circumsphere
/// radius; the apexes sit at `(0, 0, ±radius)`.
#[must_use]
pub fn vertices(radius: f64) -> Vec<Point3> {
    let mut points: Vec<Point3> = (0..4)
        .map(|i| {
            let theta = TAU * f64::from(i) / 4.0;
            Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
        })
        .collect();
    points.push(Point3::new(0.0, 0.0, radius));
    points.push(Point3::new(0.0, 0.0, -radius));
    points
}

/// Builds the octahedron face by face into the container.
///
/// # Errors
///
/// Propagates container failures.
pub fn build(radius: f64, container: &mut dyn GeometryContainer) -> Result<Vec<FaceId>> {
    assembler::add_oriented_faces(container, &vertices(radius), &FACES, &Point3::origin())
}
