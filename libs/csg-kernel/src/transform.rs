//! # Affine Transforms
//!
//! Translate/rotate/scale over any [`Geometry`]. Solids and profiles compose
//! the matrix lazily; bare polygon lists and point sets are baked in place.
//!
//! Angles are radians; the worker registry converts user-facing degrees
//! before calling in.

use crate::geometry::Geometry;
use glam::{DMat4, DVec3};

/// Translates geometry by `offset`.
pub fn translate(geometry: &Geometry, offset: DVec3) -> Geometry {
    apply(geometry, DMat4::from_translation(offset))
}

/// Rotates geometry by Euler `angles` in radians, applied X then Y then Z.
pub fn rotate(geometry: &Geometry, angles: DVec3) -> Geometry {
    let matrix = DMat4::from_rotation_z(angles.z)
        * DMat4::from_rotation_y(angles.y)
        * DMat4::from_rotation_x(angles.x);
    apply(geometry, matrix)
}

/// Scales geometry by per-axis `factors`.
pub fn scale(geometry: &Geometry, factors: DVec3) -> Geometry {
    apply(geometry, DMat4::from_scale(factors))
}

fn apply(geometry: &Geometry, matrix: DMat4) -> Geometry {
    match geometry {
        Geometry::Solid(solid) => Geometry::Solid(solid.transformed(matrix)),
        Geometry::Profile(profile) => Geometry::Profile(profile.transformed(matrix)),
        Geometry::Polygons(polygons) => {
            Geometry::Polygons(polygons.iter().map(|p| p.transformed(matrix)).collect())
        }
        Geometry::Points(points) => Geometry::Points(points.transformed(matrix)),
        Geometry::Empty => Geometry::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cube;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn translate_shifts_bounding_box() {
        let solid = cube(2.0, false).unwrap();
        let moved = translate(&Geometry::Solid(solid), DVec3::new(10.0, 0.0, 0.0));
        let (min, max) = moved.as_solid().unwrap().bounding_box().unwrap();
        assert_relative_eq!(min.x, 10.0);
        assert_relative_eq!(max.x, 12.0);
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let solid = cube(1.0, false).unwrap();
        let turned = rotate(&Geometry::Solid(solid), DVec3::new(0.0, 0.0, FRAC_PI_2));
        let (min, max) = turned.as_solid().unwrap().bounding_box().unwrap();
        // The unit cube at the origin corner rotates into negative x.
        assert_relative_eq!(min.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_multiplies_extent() {
        let solid = cube(1.0, false).unwrap();
        let grown = scale(&Geometry::Solid(solid), DVec3::new(2.0, 3.0, 4.0));
        let (_, max) = grown.as_solid().unwrap().bounding_box().unwrap();
        assert_relative_eq!(max.x, 2.0);
        assert_relative_eq!(max.y, 3.0);
        assert_relative_eq!(max.z, 4.0);
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(translate(&Geometry::Empty, DVec3::X), Geometry::Empty);
    }
}
