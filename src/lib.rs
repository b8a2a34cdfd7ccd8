//! Parametric construction of the five regular polyhedra.
//!
//! Each solid is generated from a single circumsphere radius, centered on
//! the origin, and emitted as an oriented polygon set with outward normals
//! through the [`container::GeometryContainer`] seam. The
//! [`parametric`] module carries the shared construction protocol (suggest
//! defaults, prompt, validate, build); [`solids`] holds the per-solid
//! vertex mathematics.

pub mod commands;
pub mod container;
pub mod error;
pub mod math;
pub mod mesh;
pub mod parametric;
pub mod solids;

pub use error::{PolyhedraError, Result};
pub use solids::SolidKind;
