//! Turns combinatorial face tables plus vertex sets into oriented polygons.

use crate::container::{FaceId, GeometryContainer};
use crate::error::{ContainerError, Result};
use crate::math::polygon_3d::{newell_normal, polygon_centroid};
use crate::math::Point3;
use crate::mesh::PolygonMesh;

/// Reorders a vertex loop so its normal points away from `interior`.
///
/// The winding is computed directly from the outward-normal rule: if the
/// Newell normal of the loop points toward the interior point, the loop is
/// reversed. No post-hoc flip pass over previously created faces is needed.
///
/// # Errors
///
/// Returns [`ContainerError::DegeneratePolygon`] if the loop has no usable
/// normal.
pub fn outward_winding(
    mut points: Vec<Point3>,
    interior: &Point3,
) -> std::result::Result<Vec<Point3>, ContainerError> {
    let normal = newell_normal(&points)?;
    let centroid = polygon_centroid(&points);
    if normal.dot(&(centroid - interior)) < 0.0 {
        points.reverse();
    }
    Ok(points)
}

/// Face-by-face assembly path.
///
/// Resolves each face of the combinatorial table against the vertex set,
/// winds it outward with respect to `interior`, and inserts it into the
/// container one face at a time.
///
/// # Errors
///
/// Propagates container failures; no faces are rolled back on error.
pub fn add_oriented_faces(
    container: &mut dyn GeometryContainer,
    vertices: &[Point3],
    faces: &[&[usize]],
    interior: &Point3,
) -> Result<Vec<FaceId>> {
    let mut ids = Vec::with_capacity(faces.len());
    for face in faces {
        let loop_points: Vec<Point3> = face.iter().map(|&i| vertices[i]).collect();
        let oriented = outward_winding(loop_points, interior)?;
        ids.push(container.add_face(&oriented)?);
    }
    Ok(ids)
}

/// Batch assembly path.
///
/// Builds a [`PolygonMesh`] from a vertex set and a face table whose winding
/// is already correct by construction. The caller submits the mesh to the
/// container in a single call.
///
/// # Errors
///
/// Returns an error for malformed face tables (short loops, bad indices).
pub fn mesh_from_tables(
    vertices: &[Point3],
    faces: &[&[usize]],
) -> std::result::Result<PolygonMesh, ContainerError> {
    let mut mesh = PolygonMesh::with_capacity(vertices.len(), faces.len());
    for &vertex in vertices {
        mesh.add_point(vertex);
    }
    for face in faces {
        mesh.add_polygon(face)?;
    }
    Ok(mesh)
}
