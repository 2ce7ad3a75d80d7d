//! # Linear Extrusion
//!
//! Extrudes a 2D profile along the Z axis into a solid, with optional twist
//! interpolated over intermediate slices.
//!
//! Twist is radians here; the worker registry converts user-facing degrees.

use crate::error::KernelError;
use crate::geometry::{Polygon, Profile, Solid};
use glam::{DVec2, DVec3};

/// Parameters for linear extrusion.
#[derive(Debug, Clone, Copy)]
pub struct LinearExtrudeOptions {
    /// Extrusion height along Z
    pub height: f64,
    /// Twist angle in radians over the height
    pub twist: f64,
    /// Number of slices for twist interpolation
    pub slices: u32,
}

impl Default for LinearExtrudeOptions {
    fn default() -> Self {
        Self {
            height: 1.0,
            twist: 0.0,
            slices: 1,
        }
    }
}

/// Extrudes a counter-clockwise profile along the Z axis.
///
/// The result keeps the profile's carried transform. Caps close the prism at
/// both ends; side walls are quads between consecutive slices.
///
/// # Example
///
/// ```rust
/// use csg_kernel::ops::extrude::{extrude_linear, LinearExtrudeOptions};
/// use csg_kernel::primitives::rectangle;
/// use glam::DVec2;
///
/// let profile = rectangle(DVec2::splat(2.0), true).unwrap();
/// let solid = extrude_linear(&profile, &LinearExtrudeOptions::default()).unwrap();
/// // 2 caps + 4 side quads
/// assert_eq!(solid.polygons().len(), 6);
/// ```
pub fn extrude_linear(
    profile: &Profile,
    options: &LinearExtrudeOptions,
) -> Result<Solid, KernelError> {
    if options.height <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "extrusion height must be positive: {}",
            options.height
        )));
    }
    let points = profile.points();
    if points.len() < 3 {
        return Err(KernelError::degenerate(format!(
            "profile must have at least 3 points: {}",
            points.len()
        )));
    }

    let slices = if options.twist.abs() > f64::EPSILON {
        options.slices.max(1)
    } else {
        1
    };

    // One vertex ring per slice boundary, twist interpolated along the height
    let n = points.len();
    let mut rings: Vec<Vec<DVec3>> = Vec::with_capacity(slices as usize + 1);
    for slice in 0..=slices {
        let t = f64::from(slice) / f64::from(slices);
        let z = t * options.height;
        let angle = options.twist * t;
        let (sin, cos) = angle.sin_cos();
        let ring = points
            .iter()
            .map(|p| {
                let rotated = DVec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
                DVec3::new(rotated.x, rotated.y, z)
            })
            .collect();
        rings.push(ring);
    }

    let mut polygons = Vec::with_capacity(n * slices as usize + 2);

    // Bottom cap reversed so the face points down
    let mut bottom = rings[0].clone();
    bottom.reverse();
    polygons.push(Polygon::new(bottom));

    // Top cap keeps the counter-clockwise profile order
    polygons.push(Polygon::new(rings[rings.len() - 1].clone()));

    // Side walls
    for slice in 0..slices as usize {
        let lower = &rings[slice];
        let upper = &rings[slice + 1];
        for i in 0..n {
            let j = (i + 1) % n;
            polygons.push(Polygon::new(vec![lower[i], lower[j], upper[j], upper[i]]));
        }
    }

    let mut solid = Solid::from_polygons(polygons);
    solid = solid.transformed(profile.transform());
    Ok(solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{circle, rectangle};
    use approx::assert_relative_eq;

    #[test]
    fn extrude_square_makes_a_box() {
        let profile = rectangle(DVec2::splat(2.0), true).unwrap();
        let solid = extrude_linear(
            &profile,
            &LinearExtrudeOptions {
                height: 5.0,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(solid.polygons().len(), 6);
        let (min, max) = solid.bounding_box().unwrap();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 5.0);
        assert_relative_eq!(max.x, 1.0);
    }

    #[test]
    fn twist_adds_slices() {
        let profile = rectangle(DVec2::splat(2.0), true).unwrap();
        let solid = extrude_linear(
            &profile,
            &LinearExtrudeOptions {
                height: 4.0,
                twist: std::f64::consts::FRAC_PI_2,
                slices: 4,
            },
        )
        .unwrap();
        // 2 caps + 4 edges * 4 slices
        assert_eq!(solid.polygons().len(), 18);
    }

    #[test]
    fn negligible_height_still_closes() {
        let profile = circle(1.0, 12).unwrap();
        let solid = extrude_linear(
            &profile,
            &LinearExtrudeOptions {
                height: 0.001,
                ..Default::default()
            },
        )
        .unwrap();
        // 2 caps + 12 side quads
        assert_eq!(solid.polygons().len(), 14);
    }

    #[test]
    fn rejects_degenerate_input() {
        let profile = rectangle(DVec2::splat(2.0), true).unwrap();
        assert!(extrude_linear(
            &profile,
            &LinearExtrudeOptions {
                height: 0.0,
                ..Default::default()
            }
        )
        .is_err());
        let skinny = Profile::new(vec![DVec2::ZERO, DVec2::X]);
        assert!(extrude_linear(&skinny, &LinearExtrudeOptions::default()).is_err());
    }
}
