use crate::container::{FaceId, GeometryContainer};
use crate::error::Result;
use crate::math::constants::PHI;
use crate::math::Point3;
use crate::mesh::{assembler, Smoothing};

/// Static adjacency table over [`vertices`]: twenty triangles, outward by
/// construction. The combinatorics are independent of the radius; only the
/// point positions scale.
pub const FACES: [&[usize]; 20] = [
    &[0, 2, 1],
    &[2, 3, 1],
    &[3, 5, 1],
    &[3, 4, 5],
    &[4, 6, 5],
    &[6, 7, 5],
    &[7, 1, 5],
    &[7, 0, 1],
    &[0, 8, 2],
    &[2, 8, 9],
    &[2, 9, 3],
    &[3, 9, 4],
    &[9, 10, 4],
    &[4, 10, 6],
    &[9, 8, 10],
    &[6, 10, 11],
    &[6, 11, 7],
    &[7, 11, 0],
    &[11, 10, 8],
    &[11, 8, 0],
];

/// Computes the twelve icosahedron vertices for a circumsphere radius.
///
/// The vertices are corners of three mutually orthogonal golden rectangles:
/// signed permutations of `(±long, ±short, 0)` and its two cyclic axis
/// permutations, with `short = radius / sqrt(1 + phi^2)` and
/// `long = phi * short` (closed forms for the measured 0.525731 and
/// 0.850651 of the reference drawing).
#[must_use]
pub fn vertices(radius: f64) -> Vec<Point3> {
    let short_side = radius / (1.0 + *PHI * *PHI).sqrt();
    let long_side = *PHI * short_side;
    let (s, l) = (short_side, long_side);

    vec![
        Point3::new(l, -s, 0.0),
        Point3::new(s, 0.0, l),
        Point3::new(l, s, 0.0),
        Point3::new(0.0, l, s),
        Point3::new(-l, s, 0.0),
        Point3::new(-s, 0.0, l),
        Point3::new(-l, -s, 0.0),
        Point3::new(0.0, -l, s),
        Point3::new(s, 0.0, -l),
        Point3::new(0.0, l, -s),
        Point3::new(-s, 0.0, -l),
        Point3::new(0.0, -l, -s),
    ]
}

/// Builds the icosahedron as a single polygon mesh and submits it to the
/// container in one call, with no smoothing between adjacent faces.
///
/// # Errors
///
/// Propagates container failures.
pub fn build(radius: f64, container: &mut dyn GeometryContainer) -> Result<Vec<FaceId>> {
    let mesh = assembler::mesh_from_tables(&vertices(radius), &FACES)?;
    container.add_faces_from_mesh(&mesh, Smoothing::None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertices_lie_on_circumsphere() {
        for radius in [0.5, 1.0, 9.0] {
            let points = vertices(radius);
            assert_eq!(points.len(), 12);
            for v in points {
                assert_relative_eq!(v.coords.norm(), radius, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn golden_rectangle_sides() {
        let points = vertices(1.0);
        let short = points[1].x;
        let long = points[1].z;
        assert_relative_eq!(short, 0.525_731_112_119_133_6, max_relative = 1e-12);
        assert_relative_eq!(long, 0.850_650_808_352_04, max_relative = 1e-12);
        assert_relative_eq!(long / short, *PHI, max_relative = 1e-12);
    }

    #[test]
    fn twenty_equilateral_triangles() {
        let points = vertices(1.0);
        let mut lengths = Vec::new();
        for face in FACES {
            assert_eq!(face.len(), 3);
            for i in 0..3 {
                let a = points[face[i]];
                let b = points[face[(i + 1) % 3]];
                lengths.push((a - b).norm());
            }
        }
        let first = lengths[0];
        for len in lengths {
            assert_relative_eq!(len, first, max_relative = 1e-9);
        }
    }

    #[test]
    fn every_vertex_has_five_incident_faces() {
        let mut incident = [0usize; 12];
        for face in FACES {
            for &i in face {
                incident[i] += 1;
            }
        }
        assert!(incident.iter().all(|&count| count == 5));
    }
}
