use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{ContainerError, Result};
use crate::math::ngon::ngon_points;
use crate::math::polygon_3d::{newell_normal, polygon_area_3d};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::mesh::{PolygonMesh, Smoothing};

use super::{FaceData, FaceId, GeometryContainer};

/// Quantization grid for vertex identity queries.
const VERTEX_GRID: f64 = 1e-7;

/// Arena that owns the faces produced by solid construction.
///
/// Faces reference nothing outside the store; generational IDs keep handles
/// valid across unrelated mutations.
#[derive(Debug, Default)]
pub struct FaceStore {
    faces: SlotMap<FaceId, FaceData>,
}

impl FaceStore {
    /// Creates a new, empty face store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::FaceNotFound`] if the ID is stale.
    pub fn face(&self, id: FaceId) -> std::result::Result<&FaceData, ContainerError> {
        self.faces.get(id).ok_or(ContainerError::FaceNotFound)
    }

    /// Returns the number of faces in the store.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterates over all faces.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }

    /// Returns the union of all face vertices, deduplicated under the
    /// vertex grid tolerance.
    #[must_use]
    pub fn unique_vertices(&self) -> Vec<Point3> {
        let mut seen: HashMap<(i64, i64, i64), Point3> = HashMap::new();
        for face in self.faces.values() {
            for point in &face.points {
                seen.entry(quantize(point)).or_insert(*point);
            }
        }
        seen.into_values().collect()
    }

    /// Returns the total area of all faces in the store.
    ///
    /// For a closed solid this is its surface area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.faces
            .values()
            .map(|face| polygon_area_3d(&face.points, &face.normal))
            .sum()
    }

    /// Returns `true` if every edge is shared by exactly two faces.
    ///
    /// This is the closed 2-manifold condition for the polygon soup held by
    /// the store.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut edge_counts: HashMap<((i64, i64, i64), (i64, i64, i64)), usize> = HashMap::new();
        for face in self.faces.values() {
            let n = face.points.len();
            for i in 0..n {
                let a = quantize(&face.points[i]);
                let b = quantize(&face.points[(i + 1) % n]);
                let key = if a <= b { (a, b) } else { (b, a) };
                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }
        !edge_counts.is_empty() && edge_counts.values().all(|&count| count == 2)
    }
}

fn quantize(point: &Point3) -> (i64, i64, i64) {
    #[allow(clippy::cast_possible_truncation)]
    let key = |value: f64| (value / VERTEX_GRID).round() as i64;
    (key(point.x), key(point.y), key(point.z))
}

impl GeometryContainer for FaceStore {
    fn add_face(&mut self, points: &[Point3]) -> Result<FaceId> {
        let normal = newell_normal(points)?;
        Ok(self.faces.insert(FaceData {
            points: points.to_vec(),
            normal,
            soft_edges: false,
        }))
    }

    fn add_ngon(
        &mut self,
        center: Point3,
        axis: Vector3,
        radius: f64,
        sides: usize,
    ) -> Result<FaceId> {
        let points = ngon_points(center, axis, radius, sides)?;
        self.add_face(&points)
    }

    fn reverse_face(&mut self, face: FaceId) -> Result<()> {
        let data = self.faces.get_mut(face).ok_or(ContainerError::FaceNotFound)?;
        data.points.reverse();
        data.normal = -data.normal;
        Ok(())
    }

    fn extrude_face(&mut self, face: FaceId, distance: f64) -> Result<Vec<FaceId>> {
        if distance.abs() < TOLERANCE {
            return Err(ContainerError::DegenerateExtrusion(distance).into());
        }
        let (points, normal) = {
            let data = self.face(face)?;
            (data.points.clone(), data.normal)
        };

        // Sweep away from the face's front side, so the existing face keeps
        // facing out of the resulting prism.
        let sweep = -normal * distance;

        // Reversed base winding aligns its normal with the sweep direction;
        // translating it yields an outward cap and the side quads below wind
        // outward as well.
        let swept: Vec<Point3> = points.iter().rev().copied().collect();
        let cap: Vec<Point3> = swept.iter().map(|p| p + sweep).collect();

        let n = swept.len();
        let mut ids = Vec::with_capacity(n + 1);
        ids.push(self.add_face(&cap)?);
        for i in 0..n {
            let j = (i + 1) % n;
            let quad = [swept[i], swept[j], cap[j], cap[i]];
            ids.push(self.add_face(&quad)?);
        }
        Ok(ids)
    }

    fn add_faces_from_mesh(
        &mut self,
        mesh: &PolygonMesh,
        smoothing: Smoothing,
    ) -> Result<Vec<FaceId>> {
        let soft = smoothing == Smoothing::SoftEdges;
        let mut ids = Vec::with_capacity(mesh.polygons().len());
        for polygon in mesh.polygons() {
            let loop_points = mesh.polygon_points(polygon);
            let id = self.add_face(&loop_points)?;
            if soft {
                // add_face never evicts the ID it just returned.
                if let Some(data) = self.faces.get_mut(id) {
                    data.soft_edges = true;
                }
            }
            ids.push(id);
        }
        Ok(ids)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_3d::polygon_centroid;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square_at(z: f64) -> Vec<Point3> {
        vec![
            p(0.0, 0.0, z),
            p(1.0, 0.0, z),
            p(1.0, 1.0, z),
            p(0.0, 1.0, z),
        ]
    }

    // ── add_face / reverse_face ──

    #[test]
    fn add_face_stores_winding_normal() {
        let mut store = FaceStore::new();
        let id = store.add_face(&unit_square_at(0.0)).unwrap();
        let face = store.face(id).unwrap();
        assert_relative_eq!(face.normal.z, 1.0, max_relative = 1e-12);
        assert!(!face.soft_edges);
    }

    #[test]
    fn reverse_face_flips_normal_and_order() {
        let mut store = FaceStore::new();
        let id = store.add_face(&unit_square_at(0.0)).unwrap();
        store.reverse_face(id).unwrap();
        let face = store.face(id).unwrap();
        assert_relative_eq!(face.normal.z, -1.0, max_relative = 1e-12);
        assert_eq!(face.points[0], p(0.0, 1.0, 0.0));
    }

    #[test]
    fn degenerate_face_is_rejected() {
        let mut store = FaceStore::new();
        let line = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        assert!(store.add_face(&line).is_err());
        assert_eq!(store.face_count(), 0);
    }

    #[test]
    fn stale_id_reports_face_not_found() {
        let store = FaceStore::new();
        let other = {
            let mut scratch = FaceStore::new();
            scratch.add_face(&unit_square_at(0.0)).unwrap()
        };
        assert!(store.face(other).is_err());
    }

    // ── add_ngon ──

    #[test]
    fn ngon_face_winds_along_axis() {
        let mut store = FaceStore::new();
        let id = store
            .add_ngon(p(0.0, 0.0, 2.0), Vector3::z(), 1.5, 6)
            .unwrap();
        let face = store.face(id).unwrap();
        assert_eq!(face.points.len(), 6);
        assert_relative_eq!(face.normal.z, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn invalid_ngon_is_rejected() {
        let mut store = FaceStore::new();
        assert!(store.add_ngon(Point3::origin(), Vector3::z(), 1.0, 2).is_err());
        assert!(store
            .add_ngon(Point3::origin(), Vector3::z(), -1.0, 4)
            .is_err());
    }

    // ── extrude_face ──

    #[test]
    fn extrusion_of_square_yields_closed_box() {
        let mut store = FaceStore::new();
        let base = store.add_face(&unit_square_at(0.0)).unwrap();
        // Face normal +z; flip so the front side faces down and the prism
        // grows upward.
        store.reverse_face(base).unwrap();
        let new_faces = store.extrude_face(base, 1.0).unwrap();

        assert_eq!(new_faces.len(), 5); // cap + 4 sides
        assert_eq!(store.face_count(), 6);
        assert_eq!(store.unique_vertices().len(), 8);
        assert!(store.is_closed());
    }

    #[test]
    fn extruded_faces_wind_outward() {
        let mut store = FaceStore::new();
        let base = store.add_face(&unit_square_at(0.0)).unwrap();
        store.reverse_face(base).unwrap();
        store.extrude_face(base, 2.0).unwrap();

        let solid_center = p(0.5, 0.5, 1.0);
        for (_, face) in store.faces() {
            let to_face = polygon_centroid(&face.points) - solid_center;
            assert!(
                face.normal.dot(&to_face) > 0.0,
                "face normal {:?} points inward",
                face.normal
            );
        }
    }

    #[test]
    fn zero_distance_extrusion_is_rejected() {
        let mut store = FaceStore::new();
        let base = store.add_face(&unit_square_at(0.0)).unwrap();
        assert!(store.extrude_face(base, 0.0).is_err());
        assert_eq!(store.face_count(), 1);
    }

    // ── add_faces_from_mesh ──

    #[test]
    fn mesh_ingestion_preserves_winding_per_polygon() {
        let mut mesh = PolygonMesh::default();
        let a = mesh.add_point(p(0.0, 0.0, 0.0));
        let b = mesh.add_point(p(1.0, 0.0, 0.0));
        let c = mesh.add_point(p(0.0, 1.0, 0.0));
        mesh.add_polygon(&[a, b, c]).unwrap();
        mesh.add_polygon(&[c, b, a]).unwrap();

        let mut store = FaceStore::new();
        let ids = store.add_faces_from_mesh(&mesh, Smoothing::None).unwrap();
        assert_eq!(ids.len(), 2);
        assert_relative_eq!(store.face(ids[0]).unwrap().normal.z, 1.0, max_relative = 1e-12);
        assert_relative_eq!(store.face(ids[1]).unwrap().normal.z, -1.0, max_relative = 1e-12);
    }

    #[test]
    fn soft_edge_flag_is_recorded() {
        let mut mesh = PolygonMesh::default();
        let a = mesh.add_point(p(0.0, 0.0, 0.0));
        let b = mesh.add_point(p(1.0, 0.0, 0.0));
        let c = mesh.add_point(p(0.0, 1.0, 0.0));
        mesh.add_polygon(&[a, b, c]).unwrap();

        let mut store = FaceStore::new();
        let hard = store.add_faces_from_mesh(&mesh, Smoothing::None).unwrap();
        let soft = store
            .add_faces_from_mesh(&mesh, Smoothing::SoftEdges)
            .unwrap();
        assert!(!store.face(hard[0]).unwrap().soft_edges);
        assert!(store.face(soft[0]).unwrap().soft_edges);
    }

    // ── vertex/edge queries ──

    #[test]
    fn unique_vertices_merges_shared_corners() {
        let mut store = FaceStore::new();
        store.add_face(&unit_square_at(0.0)).unwrap();
        // Adjacent square sharing the x=1 edge.
        store
            .add_face(&[
                p(1.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 1.0, 0.0),
                p(1.0, 1.0, 0.0),
            ])
            .unwrap();
        assert_eq!(store.unique_vertices().len(), 6);
    }

    #[test]
    fn surface_area_sums_all_faces() {
        let mut store = FaceStore::new();
        let base = store.add_face(&unit_square_at(0.0)).unwrap();
        assert_relative_eq!(store.surface_area(), 1.0, max_relative = 1e-12);

        // Extruding the unit square by 1 yields a unit box: six unit faces.
        store.reverse_face(base).unwrap();
        store.extrude_face(base, 1.0).unwrap();
        assert_relative_eq!(store.surface_area(), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn open_sheet_is_not_closed() {
        let mut store = FaceStore::new();
        store.add_face(&unit_square_at(0.0)).unwrap();
        assert!(!store.is_closed());
    }

    #[test]
    fn empty_store_is_not_closed() {
        let store = FaceStore::new();
        assert!(!store.is_closed());
    }
}
