mod face_store;

pub use face_store::FaceStore;

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::mesh::{PolygonMesh, Smoothing};

slotmap::new_key_type! {
    /// Unique identifier for a face in a geometry container.
    pub struct FaceId;
}

/// Data associated with a container face.
///
/// A face is a planar polygon; its vertex order determines the winding and
/// the stored normal follows the right-hand rule over that order.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The ordered vertex loop.
    pub points: Vec<Point3>,
    /// Unit normal implied by the vertex order.
    pub normal: Vector3,
    /// Whether the face's edges are shaded soft against its neighbours.
    pub soft_edges: bool,
}

/// The geometry-kernel primitives the solid constructions are built on.
///
/// This is the seam to the host document model: the constructions only ever
/// talk to these five primitives and treat the implementation as opaque.
pub trait GeometryContainer {
    /// Creates a face from an ordered point loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the loop is degenerate.
    fn add_face(&mut self, points: &[Point3]) -> Result<FaceId>;

    /// Creates a regular n-gon face about `axis`, wound so its normal points
    /// along `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than three sides, a non-positive
    /// circumradius, or a zero-length axis.
    fn add_ngon(
        &mut self,
        center: Point3,
        axis: Vector3,
        radius: f64,
        sides: usize,
    ) -> Result<FaceId>;

    /// Reverses a face's winding, flipping its normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not in the container.
    fn reverse_face(&mut self, face: FaceId) -> Result<()>;

    /// Extrudes a face into a prism by the signed `distance`.
    ///
    /// A positive distance sweeps the face region away from its front side
    /// (opposite the face normal), so the existing face becomes an outward
    /// cap of the prism. The generated side and cap faces are returned; they
    /// are wound outward for positive distances.
    ///
    /// # Errors
    ///
    /// Returns an error for a near-zero distance or an unknown face.
    fn extrude_face(&mut self, face: FaceId, distance: f64) -> Result<Vec<FaceId>>;

    /// Converts a polygon mesh into individual faces in one call.
    ///
    /// Polygon windings are preserved verbatim. `smoothing` marks shared
    /// edges soft; the solid constructions always pass [`Smoothing::None`].
    ///
    /// # Errors
    ///
    /// Returns an error if any mesh polygon is degenerate.
    fn add_faces_from_mesh(
        &mut self,
        mesh: &PolygonMesh,
        smoothing: Smoothing,
    ) -> Result<Vec<FaceId>>;
}
