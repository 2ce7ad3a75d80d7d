//! # Cuboid Primitive
//!
//! Generates polygons for cube and rectangular prism shapes.

use crate::error::KernelError;
use crate::geometry::{Polygon, Solid};
use glam::DVec3;

/// Creates a cube with equal edge length.
///
/// # Example
///
/// ```rust
/// use csg_kernel::primitives::cube;
///
/// let solid = cube(10.0, false).unwrap();
/// assert_eq!(solid.polygons().len(), 6);
/// ```
pub fn cube(size: f64, center: bool) -> Result<Solid, KernelError> {
    cuboid(DVec3::splat(size), center)
}

/// Creates a rectangular prism.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Returns
///
/// A solid bounded by 6 quad faces with outward counter-clockwise winding,
/// which tessellates to 8 vertices worth of corners and 12 triangles.
pub fn cuboid(size: DVec3, center: bool) -> Result<Solid, KernelError> {
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "cuboid size must be positive: {:?}",
            size
        )));
    }

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec3::ZERO, size)
    };

    // 8 corners, bottom ring then top ring
    let c = [
        DVec3::new(min.x, min.y, min.z), // 0: left-front-bottom
        DVec3::new(max.x, min.y, min.z), // 1: right-front-bottom
        DVec3::new(max.x, max.y, min.z), // 2: right-back-bottom
        DVec3::new(min.x, max.y, min.z), // 3: left-back-bottom
        DVec3::new(min.x, min.y, max.z), // 4: left-front-top
        DVec3::new(max.x, min.y, max.z), // 5: right-front-top
        DVec3::new(max.x, max.y, max.z), // 6: right-back-top
        DVec3::new(min.x, max.y, max.z), // 7: left-back-top
    ];

    // 6 quad faces, counter-clockwise winding for outward normals
    let faces: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // bottom (z = min.z)
        [4, 5, 6, 7], // top (z = max.z)
        [0, 1, 5, 4], // front (y = min.y)
        [2, 3, 7, 6], // back (y = max.y)
        [3, 0, 4, 7], // left (x = min.x)
        [1, 2, 6, 5], // right (x = max.x)
    ];

    let polygons = faces
        .iter()
        .map(|face| Polygon::new(face.iter().map(|&i| c[i]).collect()))
        .collect();

    Ok(Solid::from_polygons(polygons))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_has_six_quad_faces() {
        let solid = cuboid(DVec3::splat(10.0), false).unwrap();
        assert_eq!(solid.polygons().len(), 6);
        assert!(solid.polygons().iter().all(|p| p.vertices().len() == 4));
    }

    #[test]
    fn cuboid_not_centered() {
        let solid = cuboid(DVec3::splat(10.0), false).unwrap();
        let (min, max) = solid.bounding_box().unwrap();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::splat(10.0));
    }

    #[test]
    fn cuboid_centered() {
        let solid = cuboid(DVec3::splat(10.0), true).unwrap();
        let (min, max) = solid.bounding_box().unwrap();
        assert_eq!(min, DVec3::splat(-5.0));
        assert_eq!(max, DVec3::splat(5.0));
    }

    #[test]
    fn cuboid_rectangular() {
        let solid = cuboid(DVec3::new(10.0, 20.0, 30.0), false).unwrap();
        let (min, max) = solid.bounding_box().unwrap();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn cuboid_invalid_size() {
        assert!(cuboid(DVec3::new(0.0, 10.0, 10.0), false).is_err());
        assert!(cuboid(DVec3::new(-5.0, 10.0, 10.0), false).is_err());
    }

    #[test]
    fn bottom_face_winds_downward() {
        let solid = cube(1.0, false).unwrap();
        let bottom = &solid.polygons()[0];
        let v = bottom.vertices();
        let normal = (v[1] - v[0]).cross(v[2] - v[0]);
        assert!(normal.z < 0.0);
    }
}
