use crate::error::ContainerError;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Generates the vertices of a regular n-gon.
///
/// The polygon lies in the plane through `center` perpendicular to `axis`,
/// with every vertex at `radius` from the center. Vertices are ordered
/// counter-clockwise when viewed from the tip of `axis`, so the winding
/// normal of the returned loop points along `axis`.
///
/// # Errors
///
/// Returns [`ContainerError::InvalidNgon`] if `sides < 3` or `radius` is not
/// a positive finite number, and [`ContainerError::DegeneratePolygon`] if
/// `axis` is zero-length.
pub fn ngon_points(
    center: Point3,
    axis: Vector3,
    radius: f64,
    sides: usize,
) -> Result<Vec<Point3>, ContainerError> {
    if sides < 3 || !radius.is_finite() || radius <= TOLERANCE {
        return Err(ContainerError::InvalidNgon { sides, radius });
    }

    let len = axis.norm();
    if len < TOLERANCE {
        return Err(ContainerError::DegeneratePolygon(
            "n-gon axis is zero-length".into(),
        ));
    }
    let normal = axis / len;

    // Orthonormal frame in the polygon plane; the reference vector must not
    // be parallel to the normal.
    let reference = if normal.x.abs() < 0.9 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    };
    let u_dir = normal.cross(&reference).normalize();
    let v_dir = normal.cross(&u_dir);

    let step = std::f64::consts::TAU / sides as f64;
    let points = (0..sides)
        .map(|i| {
            let theta = step * i as f64;
            center + u_dir * (radius * theta.cos()) + v_dir * (radius * theta.sin())
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_3d::newell_normal;
    use approx::assert_relative_eq;

    #[test]
    fn hexagon_points_lie_at_radius() {
        let center = Point3::new(1.0, 2.0, 3.0);
        let points = ngon_points(center, Vector3::z(), 2.5, 6).unwrap();
        assert_eq!(points.len(), 6);
        for p in &points {
            assert_relative_eq!((p - center).norm(), 2.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn winding_normal_points_along_axis() {
        let axis = Vector3::new(0.3, -1.0, 0.7);
        let points = ngon_points(Point3::origin(), axis, 1.0, 5).unwrap();
        let normal = newell_normal(&points).unwrap();
        assert!(normal.dot(&axis.normalize()) > 0.99);
    }

    #[test]
    fn triangle_is_smallest_ngon() {
        assert!(ngon_points(Point3::origin(), Vector3::z(), 1.0, 2).is_err());
        assert!(ngon_points(Point3::origin(), Vector3::z(), 1.0, 3).is_ok());
    }

    #[test]
    fn rejects_nonpositive_radius_and_zero_axis() {
        assert!(ngon_points(Point3::origin(), Vector3::z(), 0.0, 4).is_err());
        assert!(ngon_points(Point3::origin(), Vector3::z(), -1.0, 4).is_err());
        assert!(ngon_points(Point3::origin(), Vector3::zeros(), 1.0, 4).is_err());
    }
}
