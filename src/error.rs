use thiserror::Error;

/// Top-level error type for the polyhedra kernel.
#[derive(Debug, Error)]
pub enum PolyhedraError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// Errors raised while validating construction parameters.
///
/// Any of these aborts construction before the geometry container is touched.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("missing required parameter: {0}")]
    Missing(&'static str),

    #[error("parameter {name} = {value} must be a positive length")]
    NotPositive { name: &'static str, value: f64 },

    #[error("parameter {name} = {value} is not a finite number")]
    NotFinite { name: &'static str, value: f64 },
}

/// Errors raised while resolving the host's model units.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("cannot determine model units; an explicit radius is required")]
    Unresolved,
}

/// Errors raised by the geometry container primitives.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("face not found in container")]
    FaceNotFound,

    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error("invalid n-gon: {sides} sides with circumradius {radius}")]
    InvalidNgon { sides: usize, radius: f64 },

    #[error("degenerate extrusion distance {0}")]
    DegenerateExtrusion(f64),

    #[error("polygon index {index} out of bounds for mesh with {points} points")]
    IndexOutOfBounds { index: usize, points: usize },
}

/// Convenience type alias for results using [`PolyhedraError`].
pub type Result<T> = std::result::Result<T, PolyhedraError>;
