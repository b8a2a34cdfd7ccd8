use nalgebra::Rotation3;

use crate::container::{FaceId, GeometryContainer};
use crate::error::Result;
use crate::math::constants::PHI;
use crate::math::{Point3, Vector3};
use crate::mesh::{assembler, Smoothing};

/// Face table over [`vertices`]: one base pentagon, a lower and an upper
/// belt of five faces each, and one top pentagon. Windings are outward by
/// construction (base clockwise seen from outside below, top
/// counter-clockwise seen from above).
///
/// Ring index layout: base 0-4, lower shoulder 5-9, upper shoulder 10-14,
/// top 15-19.
pub const FACES: [&[usize]; 12] = [
    &[0, 4, 3, 2, 1],
    &[0, 1, 6, 11, 5],
    &[1, 2, 7, 12, 6],
    &[2, 3, 8, 13, 7],
    &[3, 4, 9, 14, 8],
    &[4, 0, 5, 10, 9],
    &[5, 11, 16, 15, 10],
    &[6, 12, 17, 16, 11],
    &[7, 13, 18, 17, 12],
    &[8, 14, 19, 18, 13],
    &[9, 10, 15, 19, 14],
    &[15, 16, 17, 18, 19],
];

/// Ring constants for a unit circumsphere radius, in closed form.
///
/// With `k = 1 / sqrt(3 * (3 - phi))`: the base and top pentagons have ring
/// radius `2k/phi`, the shoulder rings `2k`, and the pentagonal faces lie at
/// height `phi * k` (the dodecahedron's inradius over its circumradius).
/// These replace the measured decimals of the golden-rectangle drawing
/// (0.607062, 0.982247, 0.794654).
fn ring_constants() -> (f64, f64, f64) {
    let phi = *PHI;
    let k = (3.0 * (3.0 - phi)).sqrt().recip();
    (2.0 * k / phi, 2.0 * k, phi * k)
}

/// Computes the twenty dodecahedron vertices for a circumsphere radius.
///
/// Four horizontal rings of five points each, generated by successive 72°
/// rotations about the polar axis from one seed point per ring; the upper
/// two rings are offset by an extra -36°.
#[must_use]
pub fn vertices(radius: f64) -> Vec<Point3> {
    let (ring_a, ring_b, half_height) = ring_constants();
    let short_side = radius * ring_a;
    let long_side = radius * ring_b;
    let half_height = radius * half_height;
    let delta = half_height - short_side;

    let rotate72 = Rotation3::from_axis_angle(&Vector3::z_axis(), 72.0_f64.to_radians());
    let rotate_minus36 = Rotation3::from_axis_angle(&Vector3::z_axis(), (-36.0_f64).to_radians());

    let seeds = [
        Point3::new(short_side, 0.0, -half_height),
        Point3::new(long_side, 0.0, -delta),
        rotate_minus36 * Point3::new(long_side, 0.0, delta),
        rotate_minus36 * Point3::new(short_side, 0.0, half_height),
    ];

    let mut points = Vec::with_capacity(20);
    for seed in seeds {
        let mut current = seed;
        points.push(current);
        for _ in 1..5 {
            current = rotate72 * current;
            points.push(current);
        }
    }
    points
}

/// Builds the dodecahedron as a single polygon mesh and submits it to the
/// container in one call, with no smoothing between adjacent faces.
///
/// # Errors
///
/// Propagates container failures.
pub fn build(radius: f64, container: &mut dyn GeometryContainer) -> Result<Vec<FaceId>> {
    let mesh = assembler::mesh_from_tables(&vertices(radius), &FACES)?;
    container.add_faces_from_mesh(&mesh, Smoothing::None)
}
