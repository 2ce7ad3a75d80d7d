//! # Cylinder Primitive
//!
//! Generates polygons for right circular cylinders.

use crate::error::KernelError;
use crate::geometry::{Polygon, Solid};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder along the Z axis.
///
/// # Arguments
///
/// * `radius` - Circle radius
/// * `height` - Height along Z
/// * `segments` - Number of segments around the circumference
/// * `center` - If true, center vertically at origin
///
/// # Example
///
/// ```rust
/// use csg_kernel::primitives::cylinder;
///
/// let solid = cylinder(5.0, 10.0, 32, false).unwrap();
/// // 2 caps + 32 side quads
/// assert_eq!(solid.polygons().len(), 34);
/// ```
pub fn cylinder(
    radius: f64,
    height: f64,
    segments: u32,
    center: bool,
) -> Result<Solid, KernelError> {
    if radius <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "cylinder radius must be positive: {radius}"
        )));
    }
    if height <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "cylinder height must be positive: {height}"
        )));
    }
    if segments < 3 {
        return Err(KernelError::degenerate(format!(
            "cylinder segments must be at least 3: {segments}"
        )));
    }

    let (z_bottom, z_top) = if center {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let ring: Vec<(f64, f64)> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect();

    let bottom: Vec<DVec3> = ring.iter().map(|&(x, y)| DVec3::new(x, y, z_bottom)).collect();
    let top: Vec<DVec3> = ring.iter().map(|&(x, y)| DVec3::new(x, y, z_top)).collect();

    let mut polygons = Vec::with_capacity(segments as usize + 2);

    // Bottom cap reversed so the face points down
    let mut bottom_cap = bottom.clone();
    bottom_cap.reverse();
    polygons.push(Polygon::new(bottom_cap));

    // Top cap counter-clockwise seen from above
    polygons.push(Polygon::new(top.clone()));

    // Side quads
    for j in 0..segments as usize {
        let j_next = (j + 1) % segments as usize;
        polygons.push(Polygon::new(vec![
            bottom[j],
            bottom[j_next],
            top[j_next],
            top[j],
        ]));
    }

    Ok(Solid::from_polygons(polygons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cylinder_polygon_count() {
        let solid = cylinder(5.0, 10.0, 16, false).unwrap();
        assert_eq!(solid.polygons().len(), 18);
    }

    #[test]
    fn cylinder_bounding_box() {
        let solid = cylinder(5.0, 10.0, 32, false).unwrap();
        let (min, max) = solid.bounding_box().unwrap();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 10.0);
        assert_relative_eq!(max.x, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn cylinder_centered() {
        let solid = cylinder(5.0, 10.0, 32, true).unwrap();
        let (min, max) = solid.bounding_box().unwrap();
        assert_relative_eq!(min.z, -5.0);
        assert_relative_eq!(max.z, 5.0);
    }

    #[test]
    fn cylinder_rejects_degenerate_parameters() {
        assert!(cylinder(0.0, 10.0, 32, false).is_err());
        assert!(cylinder(5.0, 0.0, 32, false).is_err());
        assert!(cylinder(5.0, 10.0, 2, false).is_err());
    }
}
