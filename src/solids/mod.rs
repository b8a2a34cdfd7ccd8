pub mod cube;
pub mod dodecahedron;
pub mod icosahedron;
pub mod octahedron;
pub mod tetrahedron;

use crate::container::{FaceId, GeometryContainer};
use crate::error::Result;

/// The five regular polyhedra.
///
/// A closed enumeration: each variant selects one construction algorithm
/// and one default-parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl SolidKind {
    /// All kinds, in menu order.
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    /// Human-readable name, as shown in the host menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "Tetrahedron",
            SolidKind::Cube => "Cube",
            SolidKind::Octahedron => "Octahedron",
            SolidKind::Dodecahedron => "Dodecahedron",
            SolidKind::Icosahedron => "Icosahedron",
        }
    }

    /// Case-insensitive lookup by menu label.
    #[must_use]
    pub fn from_label(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(name.trim()))
    }

    /// Number of vertices of this solid.
    #[must_use]
    pub const fn vertex_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 4,
            SolidKind::Cube => 8,
            SolidKind::Octahedron => 6,
            SolidKind::Dodecahedron => 20,
            SolidKind::Icosahedron => 12,
        }
    }

    /// Number of faces of this solid.
    #[must_use]
    pub const fn face_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 4,
            SolidKind::Cube => 6,
            SolidKind::Octahedron => 8,
            SolidKind::Dodecahedron => 12,
            SolidKind::Icosahedron => 20,
        }
    }

    /// Builds this solid's faces into the container.
    ///
    /// Pure with respect to everything but the container: the same radius
    /// always produces the same geometry. Callers are expected to have
    /// validated the radius (see the parametric protocol).
    ///
    /// # Errors
    ///
    /// Propagates container failures.
    pub fn build(self, radius: f64, container: &mut dyn GeometryContainer) -> Result<Vec<FaceId>> {
        match self {
            SolidKind::Tetrahedron => tetrahedron::build(radius, container),
            SolidKind::Cube => cube::build(radius, container),
            SolidKind::Octahedron => octahedron::build(radius, container),
            SolidKind::Dodecahedron => dodecahedron::build(radius, container),
            SolidKind::Icosahedron => icosahedron::build(radius, container),
        }
    }
}
