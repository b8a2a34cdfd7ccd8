use crate::error::ContainerError;

use super::{Point3, Vector3, TOLERANCE};

/// Computes the unit normal of a polygon using Newell's method.
///
/// The direction follows the right-hand rule with respect to the vertex
/// order.
///
/// # Errors
///
/// Returns [`ContainerError::DegeneratePolygon`] if the polygon has fewer
/// than three vertices or its vertices are collinear.
pub fn newell_normal(points: &[Point3]) -> Result<Vector3, ContainerError> {
    if points.len() < 3 {
        return Err(ContainerError::DegeneratePolygon(format!(
            "{} vertices, need at least 3",
            points.len()
        )));
    }
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(ContainerError::DegeneratePolygon(
            "cannot compute normal of collinear vertices".into(),
        ));
    }
    Ok(normal / len)
}

/// Computes the arithmetic centroid of a vertex loop.
#[must_use]
pub fn polygon_centroid(points: &[Point3]) -> Point3 {
    let n = points.len().max(1);
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / n as f64)
}

/// Computes the area of a planar 3D polygon.
///
/// Uses the cross-product summation method projected along the polygon
/// normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::zeros();
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal).abs()
}
