pub mod assembler;

use crate::error::ContainerError;
use crate::math::Point3;

/// Edge smoothing applied when a mesh is converted into faces.
///
/// The solid constructions always pass [`Smoothing::None`]; soft edges exist
/// for hosts that shade adjacent faces as a continuous surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Smoothing {
    /// Every face keeps a hard boundary.
    #[default]
    None,
    /// Shared edges are marked soft for shading.
    SoftEdges,
}

/// A batch structure of vertices plus face index lists.
///
/// Assembled in full before being handed to a geometry container, which
/// converts it into individual oriented faces in one call.
#[derive(Debug, Clone, Default)]
pub struct PolygonMesh {
    points: Vec<Point3>,
    polygons: Vec<Vec<usize>>,
}

impl PolygonMesh {
    /// Creates an empty mesh with room for the given counts.
    #[must_use]
    pub fn with_capacity(points: usize, polygons: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            polygons: Vec::with_capacity(polygons),
        }
    }

    /// Appends a point and returns its index.
    pub fn add_point(&mut self, point: Point3) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Appends a polygon referencing previously added points.
    ///
    /// The index order is preserved verbatim; it determines the face's
    /// winding and therefore its orientation.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::DegeneratePolygon`] for loops of fewer than
    /// three indices and [`ContainerError::IndexOutOfBounds`] for indices
    /// past the current point list.
    pub fn add_polygon(&mut self, indices: &[usize]) -> Result<(), ContainerError> {
        if indices.len() < 3 {
            return Err(ContainerError::DegeneratePolygon(format!(
                "polygon with {} indices",
                indices.len()
            )));
        }
        for &index in indices {
            if index >= self.points.len() {
                return Err(ContainerError::IndexOutOfBounds {
                    index,
                    points: self.points.len(),
                });
            }
        }
        self.polygons.push(indices.to_vec());
        Ok(())
    }

    /// Returns the point list.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the polygon index lists.
    #[must_use]
    pub fn polygons(&self) -> &[Vec<usize>] {
        &self.polygons
    }

    /// Resolves a polygon into its vertex loop.
    #[must_use]
    pub fn polygon_points(&self, polygon: &[usize]) -> Vec<Point3> {
        polygon.iter().map(|&i| self.points[i]).collect()
    }
}
